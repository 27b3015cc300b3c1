use super::error::map_sqlx;
use crate::domain::blog::{ContentKind, Slug, SlugIndex};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqliteSlugIndex {
    pool: SqlitePool,
}

impl SqliteSlugIndex {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn table(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Tag => "tags",
        ContentKind::Category => "categories",
        ContentKind::Page => "pages",
        ContentKind::Post => "posts",
    }
}

#[async_trait]
impl SlugIndex for SqliteSlugIndex {
    async fn slug_exists(&self, kind: ContentKind, slug: &Slug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(&format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE slug = ?)",
            table(kind)
        ))
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
