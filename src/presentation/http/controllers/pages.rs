use super::{PageParams, PublicView, PublishRequest};
use crate::application::{
    commands::blog::SavePageCommand,
    dto::{PageDto, Paginated},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::SiteContext;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct PageRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_published: bool,
}

impl From<PageRequest> for SavePageCommand {
    fn from(request: PageRequest) -> Self {
        Self {
            title: request.title,
            slug: request.slug,
            content: request.content,
            is_published: request.is_published,
        }
    }
}

pub async fn list_pages(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Paginated<PageDto>>> {
    state
        .services
        .blog_queries
        .list_pages(params.page())
        .await
        .into_http()
        .map(Json)
}

pub async fn get_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .blog_queries
        .get_page(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_page(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<PageRequest>,
) -> HttpResult<(StatusCode, Json<PageDto>)> {
    let page = state
        .services
        .blog_commands
        .create_page(payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(page)))
}

pub async fn update_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PageRequest>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .blog_commands
        .update_page(id, payload.into())
        .await
        .into_http()
        .map(Json)
}

pub async fn set_page_published(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .blog_commands
        .set_page_published(id, payload.is_published)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_page(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .blog_commands
        .delete_page(id)
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn public_page(
    Extension(state): Extension<HttpState>,
    SiteContext(site): SiteContext,
    Path(slug): Path<String>,
) -> HttpResult<Json<PublicView<PageDto>>> {
    let page = state
        .services
        .blog_queries
        .public_page(slug)
        .await
        .into_http()?;
    Ok(Json(PublicView { site, data: page }))
}
