use super::{
    error::map_sqlx,
    listing::{Filterable, push_conditions, push_page},
};
use crate::domain::blog::{
    Category, CategoryId, CategoryRepository, DisplayName, ListFilter, NewCategory, NewTag, Slug,
    Tag, TagId, TagRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const TERM_COLUMNS: Filterable = Filterable {
    searchable: &["id", "name", "slug"],
    published: false,
    category: false,
    tag: false,
};

#[derive(Debug, FromRow)]
struct TermRow {
    id: i64,
    name: String,
    slug: String,
}

impl TryFrom<TermRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TermRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            id: TagId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            slug: Slug::new(row.slug)?,
        })
    }
}

impl TryFrom<TermRow> for Category {
    type Error = DomainError;

    fn try_from(row: TermRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            slug: Slug::new(row.slug)?,
        })
    }
}

/// Tags and categories share one table layout: `id`, `name`, `slug`.
#[derive(Clone)]
struct TermTable {
    pool: SqlitePool,
    table: &'static str,
    label: &'static str,
}

impl TermTable {
    async fn insert(&self, name: &DisplayName, slug: &Slug) -> DomainResult<TermRow> {
        sqlx::query_as::<_, TermRow>(&format!(
            "INSERT INTO {} (name, slug) VALUES (?, ?) RETURNING id, name, slug",
            self.table
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn update(&self, id: i64, name: &DisplayName, slug: &Slug) -> DomainResult<TermRow> {
        sqlx::query_as::<_, TermRow>(&format!(
            "UPDATE {} SET name = ?, slug = ? WHERE id = ? RETURNING id, name, slug",
            self.table
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| self.missing(id))
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", self.table))
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(self.missing(id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TermRow>> {
        sqlx::query_as::<_, TermRow>(&format!(
            "SELECT id, name, slug FROM {} WHERE id = ?",
            self.table
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<TermRow>> {
        sqlx::query_as::<_, TermRow>(&format!(
            "SELECT id, name, slug FROM {} WHERE slug = ?",
            self.table
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list(&self, filter: &ListFilter) -> DomainResult<(Vec<TermRow>, u64)> {
        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT id, name, slug FROM {}", self.table));
        push_conditions(&mut list_builder, filter, TERM_COLUMNS);
        push_page(&mut list_builder, filter);

        let rows = list_builder
            .build_query_as::<TermRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT COUNT(1) FROM {}", self.table));
        push_conditions(&mut count_builder, filter, TERM_COLUMNS);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((rows, u64::try_from(total).unwrap_or_default()))
    }

    fn missing(&self, id: i64) -> DomainError {
        DomainError::missing(self.label, id)
    }
}

fn convert<E>(rows: Vec<TermRow>) -> DomainResult<Vec<E>>
where
    E: TryFrom<TermRow, Error = DomainError>,
{
    rows.into_iter().map(E::try_from).collect()
}

#[derive(Clone)]
pub struct SqliteTagRepository {
    terms: TermTable,
}

impl SqliteTagRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            terms: TermTable {
                pool,
                table: "tags",
                label: "tag",
            },
        }
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        self.terms.insert(&tag.name, &tag.slug).await?.try_into()
    }

    async fn update(&self, tag: &Tag) -> DomainResult<Tag> {
        self.terms
            .update(tag.id.into(), &tag.name, &tag.slug)
            .await?
            .try_into()
    }

    async fn delete(&self, id: TagId) -> DomainResult<()> {
        self.terms.delete(id.into()).await
    }

    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>> {
        self.terms
            .find_by_id(id.into())
            .await?
            .map(Tag::try_from)
            .transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>> {
        self.terms
            .find_by_slug(slug)
            .await?
            .map(Tag::try_from)
            .transpose()
    }

    async fn list(&self, filter: &ListFilter) -> DomainResult<(Vec<Tag>, u64)> {
        let (rows, total) = self.terms.list(filter).await?;
        Ok((convert(rows)?, total))
    }
}

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    terms: TermTable,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            terms: TermTable {
                pool,
                table: "categories",
                label: "category",
            },
        }
    }
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        self.terms
            .insert(&category.name, &category.slug)
            .await?
            .try_into()
    }

    async fn update(&self, category: &Category) -> DomainResult<Category> {
        self.terms
            .update(category.id.into(), &category.name, &category.slug)
            .await?
            .try_into()
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        self.terms.delete(id.into()).await
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.terms
            .find_by_id(id.into())
            .await?
            .map(Category::try_from)
            .transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        self.terms
            .find_by_slug(slug)
            .await?
            .map(Category::try_from)
            .transpose()
    }

    async fn list(&self, filter: &ListFilter) -> DomainResult<(Vec<Category>, u64)> {
        let (rows, total) = self.terms.list(filter).await?;
        Ok((convert(rows)?, total))
    }
}
