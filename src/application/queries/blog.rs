use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, PageDto, Paginated, PostDto, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{
        CategoryId, CategoryRepository, ListFilter, PageId, PageRepository, PostId,
        PostRepository, Slug, TagId, TagRepository,
    },
};

/// Page size of the public post listing.
pub const PUBLIC_PER_PAGE: u32 = 9;
/// Page size of the plain API listings.
pub const API_PER_PAGE: u32 = 50;

#[derive(Debug, Clone, Default)]
pub struct PublicPostsQuery {
    pub page: u32,
    pub q: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
}

pub struct BlogQueryService {
    tags: Arc<dyn TagRepository>,
    categories: Arc<dyn CategoryRepository>,
    pages: Arc<dyn PageRepository>,
    posts: Arc<dyn PostRepository>,
}

impl BlogQueryService {
    pub fn new(
        tags: Arc<dyn TagRepository>,
        categories: Arc<dyn CategoryRepository>,
        pages: Arc<dyn PageRepository>,
        posts: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            tags,
            categories,
            pages,
            posts,
        }
    }

    pub async fn get_tag(&self, id: i64) -> ApplicationResult<TagDto> {
        self.tags
            .find_by_id(TagId::new(id)?)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("tag not found"))
    }

    pub async fn get_category(&self, id: i64) -> ApplicationResult<CategoryDto> {
        self.categories
            .find_by_id(CategoryId::new(id)?)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }

    pub async fn get_page(&self, id: i64) -> ApplicationResult<PageDto> {
        self.pages
            .find_by_id(PageId::new(id)?)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("page not found"))
    }

    pub async fn get_post(&self, id: i64) -> ApplicationResult<PostDto> {
        self.posts
            .find_by_id(PostId::new(id)?)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    pub async fn list_tags(&self, page: u32) -> ApplicationResult<Paginated<TagDto>> {
        let (items, total) = self.tags.list(&ListFilter::page(API_PER_PAGE, page)).await?;
        Ok(paginate(items, page, API_PER_PAGE, total))
    }

    pub async fn list_categories(&self, page: u32) -> ApplicationResult<Paginated<CategoryDto>> {
        let (items, total) = self
            .categories
            .list(&ListFilter::page(API_PER_PAGE, page))
            .await?;
        Ok(paginate(items, page, API_PER_PAGE, total))
    }

    pub async fn list_pages(&self, page: u32) -> ApplicationResult<Paginated<PageDto>> {
        let (items, total) = self.pages.list(&ListFilter::page(API_PER_PAGE, page)).await?;
        Ok(paginate(items, page, API_PER_PAGE, total))
    }

    pub async fn list_posts(&self, page: u32) -> ApplicationResult<Paginated<PostDto>> {
        let (items, total) = self.posts.list(&ListFilter::page(API_PER_PAGE, page)).await?;
        Ok(paginate(items, page, API_PER_PAGE, total))
    }

    /// Unpublished pages are reported as missing.
    pub async fn public_page(&self, slug: String) -> ApplicationResult<PageDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("page not found"))?;
        self.pages
            .find_by_slug(&slug)
            .await?
            .filter(|page| page.is_published)
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("page not found"))
    }

    /// Unpublished posts are reported as missing.
    pub async fn public_post(&self, slug: String) -> ApplicationResult<PostDto> {
        let slug = Slug::new(slug).map_err(|_| ApplicationError::not_found("post not found"))?;
        self.posts
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.is_published)
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    pub async fn list_public_posts(
        &self,
        query: PublicPostsQuery,
    ) -> ApplicationResult<Paginated<PostDto>> {
        let page = query.page.max(1);
        let mut filter = ListFilter::page(PUBLIC_PER_PAGE, page);
        filter.published = Some(true);
        filter.search = query.q;
        filter.search_fields = &["title", "excerpt", "content"];

        if let Some(raw) = query.category {
            let Some(category) = self.find_category_by_slug(raw).await? else {
                return Ok(Paginated::new(Vec::new(), page, PUBLIC_PER_PAGE, 0));
            };
            filter.category = Some(category);
        }
        if let Some(raw) = query.tag {
            let Some(tag) = self.find_tag_by_slug(raw).await? else {
                return Ok(Paginated::new(Vec::new(), page, PUBLIC_PER_PAGE, 0));
            };
            filter.tag = Some(tag);
        }

        let (items, total) = self.posts.list(&filter).await?;
        Ok(paginate(items, page, PUBLIC_PER_PAGE, total))
    }

    async fn find_category_by_slug(&self, raw: String) -> ApplicationResult<Option<CategoryId>> {
        let Ok(slug) = Slug::new(raw) else {
            return Ok(None);
        };
        Ok(self.categories.find_by_slug(&slug).await?.map(|c| c.id))
    }

    async fn find_tag_by_slug(&self, raw: String) -> ApplicationResult<Option<TagId>> {
        let Ok(slug) = Slug::new(raw) else {
            return Ok(None);
        };
        Ok(self.tags.find_by_slug(&slug).await?.map(|t| t.id))
    }
}

fn paginate<E, D: From<E>>(items: Vec<E>, page: u32, per_page: u32, total: u64) -> Paginated<D> {
    Paginated::new(items.into_iter().map(Into::into).collect(), page, per_page, total)
}
