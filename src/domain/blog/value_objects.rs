use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

entity_id!(TagId, "tag id");
entity_id!(CategoryId, "category id");
entity_id!(PageId, "page id");
entity_id!(PostId, "post id");
entity_id!(UserId, "user id");

bounded_text!(DisplayName, "name", 255);
bounded_text!(Title, "title", 65);
bounded_text!(Excerpt, "excerpt", 150);

/// The four content kinds that carry a slug. Slugs are unique per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Tag,
    Category,
    Page,
    Post,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Tag,
        ContentKind::Category,
        ContentKind::Page,
        ContentKind::Post,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Tag => "tag",
            ContentKind::Category => "category",
            ContentKind::Page => "page",
            ContentKind::Post => "post",
        }
    }

    /// Plural form used in URLs.
    pub fn plural(&self) -> &'static str {
        match self {
            ContentKind::Tag => "tags",
            ContentKind::Category => "categories",
            ContentKind::Page => "pages",
            ContentKind::Post => "posts",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value || kind.plural() == value)
            .ok_or_else(|| DomainError::NotFound(format!("unknown content kind: {value}")))
    }
}

/// URL-safe identifier, unique per [`ContentKind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub const MAX_LEN: usize = 255;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > Self::MAX_LEN {
            return Err(DomainError::Validation(format!(
                "slug must be at most {} characters",
                Self::MAX_LEN
            )));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
        {
            return Err(DomainError::Validation(
                "slug may only contain lowercase letters, digits, hyphens and underscores".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Blank input means "no slug yet"; anything else must be a valid slug.
    pub fn parse_optional(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            Some(value) if !value.trim().is_empty() => Self::new(value.trim()).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_lowercase_digits_and_separators() {
        let slug = Slug::new("hello-world_2024-ab3k").unwrap();
        assert_eq!(slug.as_str(), "hello-world_2024-ab3k");
    }

    #[test]
    fn slug_rejects_uppercase_and_spaces() {
        assert!(Slug::new("Hello").is_err());
        assert!(Slug::new("hello world").is_err());
        assert!(Slug::new("").is_err());
    }

    #[test]
    fn slug_rejects_overlong_values() {
        assert!(Slug::new("a".repeat(Slug::MAX_LEN)).is_ok());
        assert!(Slug::new("a".repeat(Slug::MAX_LEN + 1)).is_err());
    }

    #[test]
    fn blank_optional_slug_is_absent() {
        assert!(Slug::parse_optional(None).unwrap().is_none());
        assert!(Slug::parse_optional(Some("   ".into())).unwrap().is_none());
        assert_eq!(
            Slug::parse_optional(Some(" about ".into())).unwrap(),
            Some(Slug::new("about").unwrap())
        );
    }

    #[test]
    fn title_is_bounded_in_characters() {
        assert!(Title::new("é".repeat(65)).is_ok());
        assert!(Title::new("é".repeat(66)).is_err());
        assert!(Title::new("  ").is_err());
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(PostId::new(0).is_err());
        assert_eq!(i64::from(PostId::new(7).unwrap()), 7);
    }

    #[test]
    fn content_kind_parses_singular_and_plural() {
        assert_eq!("posts".parse::<ContentKind>().unwrap(), ContentKind::Post);
        assert_eq!("category".parse::<ContentKind>().unwrap(), ContentKind::Category);
        assert!("users".parse::<ContentKind>().is_err());
    }
}
