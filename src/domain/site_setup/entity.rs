use crate::domain::blog::Title;
use crate::domain::media::ImageRef;

entity_id!(SiteSetupId, "site setup id");
entity_id!(MenuLinkId, "menu link id");

bounded_text!(SiteDescription, "description", 255);
bounded_text!(MenuText, "menu link text", 50);
bounded_text!(UrlOrPath, "url or path", 2048);

/// Which parts of the site layout are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    pub show_header: bool,
    pub show_search: bool,
    pub show_menu: bool,
    pub show_description: bool,
    pub show_pagination: bool,
    pub show_footer: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            show_header: true,
            show_search: true,
            show_menu: true,
            show_description: true,
            show_pagination: true,
            show_footer: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SiteSetup {
    pub id: SiteSetupId,
    pub title: Title,
    pub description: SiteDescription,
    pub flags: DisplayFlags,
    pub favicon: ImageRef,
}

#[derive(Debug, Clone)]
pub struct NewSiteSetup {
    pub title: Title,
    pub description: SiteDescription,
    pub flags: DisplayFlags,
    pub favicon: ImageRef,
}

#[derive(Debug, Clone)]
pub struct MenuLink {
    pub id: MenuLinkId,
    pub text: MenuText,
    pub url_or_path: UrlOrPath,
    pub new_tab: bool,
    pub site_setup_id: Option<SiteSetupId>,
}

#[derive(Debug, Clone)]
pub struct NewMenuLink {
    pub text: MenuText,
    pub url_or_path: UrlOrPath,
    pub new_tab: bool,
    pub site_setup_id: Option<SiteSetupId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_flags_default_to_shown() {
        let flags = DisplayFlags::default();
        assert!(flags.show_header && flags.show_search && flags.show_menu);
        assert!(flags.show_description && flags.show_pagination && flags.show_footer);
    }

    #[test]
    fn menu_text_is_limited_to_fifty_chars() {
        assert!(MenuText::new("x".repeat(50)).is_ok());
        assert!(MenuText::new("x".repeat(51)).is_err());
    }
}
