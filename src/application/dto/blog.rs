use crate::domain::blog::{Category, Page, Post, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name.into_inner(),
            slug: tag.slug.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name.into_inner(),
            slug: category.slug.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub is_published: bool,
    pub content: String,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            title: page.title.into_inner(),
            slug: page.slug.into_inner(),
            is_published: page.is_published,
            content: page.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub is_published: bool,
    pub content: String,
    /// Stored media name; empty when the post has no cover.
    pub cover: String,
    pub cover_in_post_content: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            excerpt: post.excerpt.into_inner(),
            is_published: post.is_published,
            content: post.content,
            cover: post.cover.into_inner(),
            cover_in_post_content: post.cover_in_post_content,
            created_at: post.created_at,
            updated_at: post.updated_at,
            created_by: post.created_by.map(Into::into),
            updated_by: post.updated_by.map(Into::into),
            category_id: post.category_id.map(Into::into),
            tag_ids: post.tag_ids.into_iter().map(Into::into).collect(),
        }
    }
}
