use super::{
    error::map_sqlx,
    listing::{Filterable, push_conditions, push_page},
};
use crate::domain::blog::{ListFilter, NewPage, Page, PageId, PageRepository, Slug, Title};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const PAGE_COLUMNS: Filterable = Filterable {
    searchable: &["id", "title", "content", "slug"],
    published: true,
    category: false,
    tag: false,
};

#[derive(Clone)]
pub struct SqlitePageRepository {
    pool: SqlitePool,
}

impl SqlitePageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    id: i64,
    title: String,
    slug: String,
    is_published: bool,
    content: String,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            id: PageId::new(row.id)?,
            title: Title::new(row.title)?,
            slug: Slug::new(row.slug)?,
            is_published: row.is_published,
            content: row.content,
        })
    }
}

#[async_trait]
impl PageRepository for SqlitePageRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let NewPage {
            title,
            slug,
            is_published,
            content,
        } = page;

        let row = sqlx::query_as::<_, PageRow>(
            "INSERT INTO pages (title, slug, is_published, content) VALUES (?, ?, ?, ?) RETURNING id, title, slug, is_published, content",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(is_published)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Page::try_from(row)
    }

    async fn update(&self, page: &Page) -> DomainResult<Page> {
        let row = sqlx::query_as::<_, PageRow>(
            "UPDATE pages SET title = ?, slug = ?, is_published = ?, content = ? WHERE id = ? RETURNING id, title, slug, is_published, content",
        )
        .bind(page.title.as_str())
        .bind(page.slug.as_str())
        .bind(page.is_published)
        .bind(page.content.as_str())
        .bind(i64::from(page.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::missing("page", page.id))?;

        Page::try_from(row)
    }

    async fn delete(&self, id: PageId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM pages WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::missing("page", id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(
            "SELECT id, title, slug, is_published, content FROM pages WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(
            "SELECT id, title, slug, is_published, content FROM pages WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn list(&self, filter: &ListFilter) -> DomainResult<(Vec<Page>, u64)> {
        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT id, title, slug, is_published, content FROM pages");
        push_conditions(&mut list_builder, filter, PAGE_COLUMNS);
        push_page(&mut list_builder, filter);

        let rows = list_builder
            .build_query_as::<PageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM pages");
        push_conditions(&mut count_builder, filter, PAGE_COLUMNS);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let pages = rows
            .into_iter()
            .map(Page::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((pages, u64::try_from(total).unwrap_or_default()))
    }
}
