//! Per-kind configuration of the admin change lists.

use crate::domain::blog::ContentKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    IdDesc,
}

impl Ordering {
    /// Django-style ordering key.
    pub fn as_str(self) -> &'static str {
        match self {
            Ordering::IdDesc => "-id",
        }
    }
}

#[derive(Debug)]
pub struct AdminListConfig {
    pub kind: ContentKind,
    pub list_display: &'static [&'static str],
    pub list_display_links: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    pub list_per_page: u32,
    pub ordering: Ordering,
    pub list_filter: &'static [&'static str],
    pub list_editable: &'static [&'static str],
    pub readonly_fields: &'static [&'static str],
    /// `(target, source)`: the admin form pre-fills `target` from `source`.
    pub prepopulated_fields: &'static [(&'static str, &'static str)],
    pub autocomplete_fields: &'static [&'static str],
}

impl AdminListConfig {
    pub fn is_filterable(&self, field: &str) -> bool {
        self.list_filter.contains(&field)
    }
}

pub static TAG_ADMIN: AdminListConfig = AdminListConfig {
    kind: ContentKind::Tag,
    list_display: &["id", "name", "slug"],
    list_display_links: &["name"],
    search_fields: &["id", "name", "slug"],
    list_per_page: 10,
    ordering: Ordering::IdDesc,
    list_filter: &[],
    list_editable: &[],
    readonly_fields: &[],
    prepopulated_fields: &[("slug", "name")],
    autocomplete_fields: &[],
};

pub static CATEGORY_ADMIN: AdminListConfig = AdminListConfig {
    kind: ContentKind::Category,
    list_display: &["id", "name", "slug"],
    list_display_links: &["name"],
    search_fields: &["id", "name", "slug"],
    list_per_page: 10,
    ordering: Ordering::IdDesc,
    list_filter: &[],
    list_editable: &[],
    readonly_fields: &[],
    prepopulated_fields: &[("slug", "name")],
    autocomplete_fields: &[],
};

pub static PAGE_ADMIN: AdminListConfig = AdminListConfig {
    kind: ContentKind::Page,
    list_display: &["id", "title", "is_published"],
    list_display_links: &["title"],
    search_fields: &["id", "slug", "title", "content"],
    list_per_page: 50,
    ordering: Ordering::IdDesc,
    list_filter: &["is_published"],
    list_editable: &["is_published"],
    readonly_fields: &[],
    prepopulated_fields: &[("slug", "title")],
    autocomplete_fields: &[],
};

pub static POST_ADMIN: AdminListConfig = AdminListConfig {
    kind: ContentKind::Post,
    list_display: &["id", "title", "is_published", "created_at"],
    list_display_links: &["title"],
    search_fields: &["id", "slug", "title", "excerpt", "content"],
    list_per_page: 50,
    ordering: Ordering::IdDesc,
    list_filter: &["category", "is_published"],
    list_editable: &["is_published"],
    readonly_fields: &["created_at", "updated_at", "created_by", "updated_by"],
    prepopulated_fields: &[("slug", "title")],
    autocomplete_fields: &["category", "tags"],
};

pub fn admin_config(kind: ContentKind) -> &'static AdminListConfig {
    match kind {
        ContentKind::Tag => &TAG_ADMIN,
        ContentKind::Category => &CATEGORY_ADMIN,
        ContentKind::Page => &PAGE_ADMIN,
        ContentKind::Post => &POST_ADMIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_matching_config() {
        for kind in ContentKind::ALL {
            assert_eq!(admin_config(kind).kind, kind);
        }
    }

    #[test]
    fn display_links_are_displayed_columns() {
        for kind in ContentKind::ALL {
            let config = admin_config(kind);
            for link in config.list_display_links {
                assert!(config.list_display.contains(link), "{kind}: {link}");
            }
        }
    }

    #[test]
    fn only_pages_and_posts_edit_publication_inline() {
        assert_eq!(PAGE_ADMIN.list_editable, ["is_published"]);
        assert_eq!(POST_ADMIN.list_editable, ["is_published"]);
        assert!(TAG_ADMIN.list_editable.is_empty());
        assert!(POST_ADMIN.is_filterable("category"));
        assert!(!PAGE_ADMIN.is_filterable("category"));
    }
}
