use crate::domain::blog::ListFilter;
use sqlx::{QueryBuilder, Sqlite};

/// Which listing filters a table understands.
#[derive(Debug, Clone, Copy)]
pub(super) struct Filterable {
    /// Columns a search term may be matched against.
    pub searchable: &'static [&'static str],
    pub published: bool,
    pub category: bool,
    pub tag: bool,
}

struct Conditions {
    started: bool,
}

impl Conditions {
    fn next(&mut self, builder: &mut QueryBuilder<'_, Sqlite>) {
        builder.push(if self.started { " AND " } else { " WHERE " });
        self.started = true;
    }
}

/// `%term%` with LIKE wildcards in `term` escaped by `\`. Case folding is
/// ASCII-only to agree with SQLite's `LOWER()`.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c.to_ascii_lowercase());
    }
    pattern.push('%');
    pattern
}

/// Append the `WHERE` clause for `filter`. Search terms are matched
/// case-insensitively as substrings; `id` only matches a numeric term exactly.
pub(super) fn push_conditions(
    builder: &mut QueryBuilder<'_, Sqlite>,
    filter: &ListFilter,
    columns: Filterable,
) {
    let mut conditions = Conditions { started: false };

    if let Some(term) = filter.search_term() {
        let fields: Vec<&str> = filter
            .search_fields
            .iter()
            .copied()
            .filter(|field| columns.searchable.contains(field))
            .collect();

        if !fields.is_empty() {
            conditions.next(builder);
            builder.push("(");
            let pattern = like_pattern(term);
            let numeric = term.parse::<i64>().ok();
            let mut matched_any = false;
            for field in fields {
                if field == "id" {
                    let Some(id) = numeric else { continue };
                    if matched_any {
                        builder.push(" OR ");
                    }
                    builder.push("id = ");
                    builder.push_bind(id);
                } else {
                    if matched_any {
                        builder.push(" OR ");
                    }
                    builder.push("LOWER(");
                    builder.push(field);
                    builder.push(") LIKE ");
                    builder.push_bind(pattern.clone());
                    builder.push(" ESCAPE '\\'");
                }
                matched_any = true;
            }
            if !matched_any {
                builder.push("0");
            }
            builder.push(")");
        }
    }

    if columns.published
        && let Some(published) = filter.published
    {
        conditions.next(builder);
        builder.push("is_published = ");
        builder.push_bind(published);
    }

    if columns.category
        && let Some(category) = filter.category
    {
        conditions.next(builder);
        builder.push("category_id = ");
        builder.push_bind(i64::from(category));
    }

    if columns.tag
        && let Some(tag) = filter.tag
    {
        conditions.next(builder);
        builder.push("id IN (SELECT post_id FROM post_tags WHERE tag_id = ");
        builder.push_bind(i64::from(tag));
        builder.push(")");
    }
}

/// Newest first, then the requested window.
pub(super) fn push_page(builder: &mut QueryBuilder<'_, Sqlite>, filter: &ListFilter) {
    builder.push(" ORDER BY id DESC LIMIT ");
    builder.push_bind(i64::from(filter.limit.max(1)));
    builder.push(" OFFSET ");
    builder.push_bind(i64::from(filter.offset));
}
