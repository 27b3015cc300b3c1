use std::sync::Arc;

use crate::application::{
    ApplicationError, ApplicationResult,
    ports::util::{SlugGenerator, SuffixGenerator},
};
use crate::domain::blog::{ContentKind, Slug, SlugIndex};

/// Produces `<slugified-name>-<random suffix>` slugs that are free for their kind.
pub struct SlugAssigner {
    index: Arc<dyn SlugIndex>,
    generator: Arc<dyn SlugGenerator>,
    suffixes: Arc<dyn SuffixGenerator>,
    max_attempts: u32,
}

impl SlugAssigner {
    pub fn new(
        index: Arc<dyn SlugIndex>,
        generator: Arc<dyn SlugGenerator>,
        suffixes: Arc<dyn SuffixGenerator>,
        max_attempts: u32,
    ) -> Self {
        Self {
            index,
            generator,
            suffixes,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Normalised form of `name`, shortened so that `-` plus a suffix of
    /// `suffix_len` characters still fits in a slug.
    pub fn base_slug(&self, kind: ContentKind, name: &str, suffix_len: usize) -> String {
        let slugified = self.generator.slugify(name);
        let base = if slugified.is_empty() {
            kind.as_str().to_owned()
        } else {
            slugified
        };

        let budget = Slug::MAX_LEN.saturating_sub(suffix_len + 1).max(1);
        if base.len() <= budget {
            return base;
        }
        let mut cut = budget;
        while !base.is_char_boundary(cut) {
            cut -= 1;
        }
        let trimmed = base[..cut].trim_end_matches(['-', '_']);
        if trimmed.is_empty() {
            kind.as_str().to_owned()
        } else {
            trimmed.to_owned()
        }
    }

    pub async fn assign(
        &self,
        kind: ContentKind,
        name: &str,
        suffix_len: usize,
    ) -> ApplicationResult<Slug> {
        let base = self.base_slug(kind, name, suffix_len);
        // Without a suffix every attempt would check the same candidate.
        let attempts = if suffix_len == 0 { 1 } else { self.max_attempts };

        for attempt in 1..=attempts {
            let candidate = if suffix_len == 0 {
                base.clone()
            } else {
                format!("{base}-{}", self.suffixes.suffix(suffix_len))
            };
            let slug = Slug::new(candidate)?;

            if !self.index.slug_exists(kind, &slug).await? {
                tracing::debug!(%kind, %slug, attempt, "assigned slug");
                return Ok(slug);
            }
            tracing::warn!(%kind, %slug, attempt, "slug collision, regenerating suffix");
        }

        Err(ApplicationError::SlugCollisionExhausted { kind, attempts })
    }
}
