// src/domain/blog/repository.rs
use crate::domain::blog::entity::{
    Category, NewCategory, NewPage, NewPost, NewTag, Page, Post, Tag,
};
use crate::domain::blog::value_objects::{CategoryId, ContentKind, PageId, PostId, Slug, TagId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Listing parameters shared by every content repository. Filters that do
/// not apply to a kind are ignored by that kind's repository.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub search: Option<String>,
    /// Columns `search` is matched against; `"id"` matches numerically.
    pub search_fields: &'static [&'static str],
    pub published: Option<bool>,
    pub category: Option<CategoryId>,
    pub tag: Option<TagId>,
    pub limit: u32,
    pub offset: u32,
}

impl ListFilter {
    pub fn page(limit: u32, page: u32) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            offset: page.saturating_sub(1).saturating_mul(limit),
            ..Self::default()
        }
    }

    /// Trimmed, non-empty search term.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// Uniqueness lookup used before a slug is handed out.
#[async_trait]
pub trait SlugIndex: Send + Sync {
    async fn slug_exists(&self, kind: ContentKind, slug: &Slug) -> DomainResult<bool>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn update(&self, tag: &Tag) -> DomainResult<Tag>;
    async fn delete(&self, id: TagId) -> DomainResult<()>;
    async fn find_by_id(&self, id: TagId) -> DomainResult<Option<Tag>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tag>>;
    async fn list(&self, filter: &ListFilter) -> DomainResult<(Vec<Tag>, u64)>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn update(&self, category: &Category) -> DomainResult<Category>;
    async fn delete(&self, id: CategoryId) -> DomainResult<()>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>>;
    async fn list(&self, filter: &ListFilter) -> DomainResult<(Vec<Category>, u64)>;
}

#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;
    async fn update(&self, page: &Page) -> DomainResult<Page>;
    async fn delete(&self, id: PageId) -> DomainResult<()>;
    async fn find_by_id(&self, id: PageId) -> DomainResult<Option<Page>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>>;
    async fn list(&self, filter: &ListFilter) -> DomainResult<(Vec<Page>, u64)>;
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, post: &Post) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    async fn list(&self, filter: &ListFilter) -> DomainResult<(Vec<Post>, u64)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_filter_computes_offset() {
        let filter = ListFilter::page(10, 3);
        assert_eq!(filter.limit, 10);
        assert_eq!(filter.offset, 20);
        assert_eq!(ListFilter::page(0, 0).offset, 0);
    }

    #[test]
    fn blank_search_is_ignored() {
        let filter = ListFilter {
            search: Some("   ".into()),
            ..ListFilter::default()
        };
        assert_eq!(filter.search_term(), None);
    }
}
