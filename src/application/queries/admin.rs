use std::sync::Arc;

use crate::{
    application::{
        dto::{AdminListDto, CategoryDto, PageDto, PostDto, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        admin::{AdminListConfig, admin_config},
        blog::{
            CategoryId, CategoryRepository, ContentKind, ListFilter, PageRepository,
            PostRepository, TagRepository,
        },
    },
};

#[derive(Debug, Clone, Default)]
pub struct AdminListQuery {
    pub q: Option<String>,
    pub page: u32,
    pub is_published: Option<bool>,
    pub category: Option<i64>,
}

/// Change lists as configured in [`crate::domain::admin`].
pub struct AdminQueryService {
    tags: Arc<dyn TagRepository>,
    categories: Arc<dyn CategoryRepository>,
    pages: Arc<dyn PageRepository>,
    posts: Arc<dyn PostRepository>,
}

impl AdminQueryService {
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

    pub async fn list(
        &self,
        kind: ContentKind,
        query: AdminListQuery,
    ) -> ApplicationResult<AdminListDto> {
        let config = admin_config(kind);
        let page = query.page.max(1);
        let filter = build_filter(config, &query, page)?;

        match kind {
            ContentKind::Tag => {
                let (items, total) = self.tags.list(&filter).await?;
                project::<_, TagDto>(config, items, page, total)
            }
            ContentKind::Category => {
                let (items, total) = self.categories.list(&filter).await?;
                project::<_, CategoryDto>(config, items, page, total)
            }
            ContentKind::Page => {
                let (items, total) = self.pages.list(&filter).await?;
                project::<_, PageDto>(config, items, page, total)
            }
            ContentKind::Post => {
                let (items, total) = self.posts.list(&filter).await?;
                project::<_, PostDto>(config, items, page, total)
            }
        }
    }
}

fn build_filter(
    config: &AdminListConfig,
    query: &AdminListQuery,
    page: u32,
) -> ApplicationResult<ListFilter> {
    let mut filter = ListFilter::page(config.list_per_page, page);
    filter.search = query.q.clone();
    filter.search_fields = config.search_fields;

    if let Some(published) = query.is_published {
        if !config.is_filterable("is_published") {
            return Err(ApplicationError::validation(format!(
                "{} cannot be filtered by is_published",
                config.kind.plural()
            )));
        }
        filter.published = Some(published);
    }
    if let Some(category) = query.category {
        if !config.is_filterable("category") {
            return Err(ApplicationError::validation(format!(
                "{} cannot be filtered by category",
                config.kind.plural()
            )));
        }
        filter.category = Some(CategoryId::new(category)?);
    }

    Ok(filter)
}

fn project<E, D>(
    config: &AdminListConfig,
    items: Vec<E>,
    page: u32,
    total: u64,
) -> ApplicationResult<AdminListDto>
where
    D: From<E> + serde::Serialize,
{
    let dtos: Vec<D> = items.into_iter().map(Into::into).collect();
    AdminListDto::project(config, dtos, page, total)
        .map_err(|err| ApplicationError::infrastructure(format!("admin projection failed: {err}")))
}
