use super::{
    error::map_sqlx,
    listing::{Filterable, push_conditions, push_page},
};
use crate::domain::blog::{
    CategoryId, Excerpt, ListFilter, NewPost, Post, PostId, PostRepository, Slug, TagId, Title,
    UserId,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::ImageRef;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::collections::HashMap;

const POST_COLUMNS: Filterable = Filterable {
    searchable: &["id", "slug", "title", "excerpt", "content"],
    published: true,
    category: true,
    tag: true,
};

const SELECT_POST: &str = "SELECT id, title, slug, excerpt, is_published, content, cover, cover_in_post_content, created_at, updated_at, created_by, updated_by, category_id FROM posts";

const RETURNING_POST: &str = " RETURNING id, title, slug, excerpt, is_published, content, cover, cover_in_post_content, created_at, updated_at, created_by, updated_by, category_id";

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: SqlitePool,
}

impl SqlitePostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn tag_ids(&self, post_id: i64) -> DomainResult<Vec<TagId>> {
        let ids: Vec<i64> =
            sqlx::query_scalar("SELECT tag_id FROM post_tags WHERE post_id = ? ORDER BY tag_id")
                .bind(post_id)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;
        ids.into_iter().map(TagId::new).collect()
    }

    /// Tag ids for several posts in one query.
    async fn tag_ids_for(&self, post_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<TagId>>> {
        let mut grouped: HashMap<i64, Vec<TagId>> = HashMap::new();
        if post_ids.is_empty() {
            return Ok(grouped);
        }

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT post_id, tag_id FROM post_tags WHERE post_id IN (");
        let mut separated = builder.separated(", ");
        for id in post_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY post_id, tag_id");

        let pairs: Vec<(i64, i64)> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        for (post_id, tag_id) in pairs {
            grouped.entry(post_id).or_default().push(TagId::new(tag_id)?);
        }
        Ok(grouped)
    }

    async fn with_tags(&self, row: PostRow) -> DomainResult<Post> {
        let tag_ids = self.tag_ids(row.id).await?;
        row.into_post(tag_ids)
    }
}

async fn replace_tags(
    conn: &mut SqliteConnection,
    post_id: i64,
    tag_ids: &[TagId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM post_tags WHERE post_id = ?")
        .bind(post_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    for tag_id in tag_ids {
        sqlx::query("INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?, ?)")
            .bind(post_id)
            .bind(i64::from(*tag_id))
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
    }
    Ok(())
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    excerpt: String,
    is_published: bool,
    content: String,
    cover: String,
    cover_in_post_content: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: Option<i64>,
    updated_by: Option<i64>,
    category_id: Option<i64>,
}

impl PostRow {
    fn into_post(self, tag_ids: Vec<TagId>) -> DomainResult<Post> {
        Ok(Post {
            id: PostId::new(self.id)?,
            title: Title::new(self.title)?,
            slug: Slug::new(self.slug)?,
            excerpt: Excerpt::new(self.excerpt)?,
            is_published: self.is_published,
            content: self.content,
            cover: ImageRef::new(self.cover)?,
            cover_in_post_content: self.cover_in_post_content,
            created_at: self.created_at,
            updated_at: self.updated_at,
            created_by: self.created_by.map(UserId::new).transpose()?,
            updated_by: self.updated_by.map(UserId::new).transpose()?,
            category_id: self.category_id.map(CategoryId::new).transpose()?,
            tag_ids,
        })
    }
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            excerpt,
            is_published,
            content,
            cover,
            cover_in_post_content,
            created_at,
            updated_at,
            created_by,
            category_id,
            tag_ids,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, excerpt, is_published, content, cover, cover_in_post_content, created_at, updated_at, created_by, updated_by, category_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NULL, ?){RETURNING_POST}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(excerpt.as_str())
        .bind(is_published)
        .bind(content)
        .bind(cover.name())
        .bind(cover_in_post_content)
        .bind(created_at)
        .bind(updated_at)
        .bind(created_by.map(i64::from))
        .bind(category_id.map(i64::from))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tags(&mut tx, row.id, &tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(tag_ids)
    }

    async fn update(&self, post: &Post) -> DomainResult<Post> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET title = ?, slug = ?, excerpt = ?, is_published = ?, content = ?, cover = ?, cover_in_post_content = ?, updated_at = ?, updated_by = ?, category_id = ? WHERE id = ?{RETURNING_POST}"
        ))
        .bind(post.title.as_str())
        .bind(post.slug.as_str())
        .bind(post.excerpt.as_str())
        .bind(post.is_published)
        .bind(post.content.as_str())
        .bind(post.cover.name())
        .bind(post.cover_in_post_content)
        .bind(post.updated_at)
        .bind(post.updated_by.map(i64::from))
        .bind(post.category_id.map(i64::from))
        .bind(i64::from(post.id))
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::missing("post", post.id))?;

        replace_tags(&mut tx, row.id, &post.tag_ids).await?;
        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(post.tag_ids.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::missing("post", id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POST} WHERE id = ?"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => self.with_tags(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!("{SELECT_POST} WHERE slug = ?"))
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => self.with_tags(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn list(&self, filter: &ListFilter) -> DomainResult<(Vec<Post>, u64)> {
        let mut list_builder: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_POST);
        push_conditions(&mut list_builder, filter, POST_COLUMNS);
        push_page(&mut list_builder, filter);

        let rows = list_builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM posts");
        push_conditions(&mut count_builder, filter, POST_COLUMNS);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut tags = self.tag_ids_for(&ids).await?;

        let posts = rows
            .into_iter()
            .map(|row| {
                let tag_ids = tags.remove(&row.id).unwrap_or_default();
                row.into_post(tag_ids)
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok((posts, u64::try_from(total).unwrap_or_default()))
    }
}
