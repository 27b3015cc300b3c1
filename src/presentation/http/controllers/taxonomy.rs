// src/presentation/http/controllers/taxonomy.rs
use super::PageParams;
use crate::application::{
    commands::blog::SaveTermCommand,
    dto::{CategoryDto, Paginated, TagDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct TermRequest {
    pub name: String,
    /// Omitted keeps the current slug, blank asks for a generated one.
    #[serde(default)]
    pub slug: Option<String>,
}

impl From<TermRequest> for SaveTermCommand {
    fn from(request: TermRequest) -> Self {
        Self {
            name: request.name,
            slug: request.slug,
        }
    }
}

pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Paginated<TagDto>>> {
    state
        .services
        .blog_queries
        .list_tags(params.page())
        .await
        .into_http()
        .map(Json)
}

pub async fn get_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .blog_queries
        .get_tag(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_tag(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<TermRequest>,
) -> HttpResult<(StatusCode, Json<TagDto>)> {
    let tag = state
        .services
        .blog_commands
        .create_tag(payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn update_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<TermRequest>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .blog_commands
        .update_tag(id, payload.into())
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .blog_commands
        .delete_tag(id)
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn list_categories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Paginated<CategoryDto>>> {
    state
        .services
        .blog_queries
        .list_categories(params.page())
        .await
        .into_http()
        .map(Json)
}

pub async fn get_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .blog_queries
        .get_category(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<TermRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let category = state
        .services
        .blog_commands
        .create_category(payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<TermRequest>,
) -> HttpResult<Json<CategoryDto>> {
    state
        .services
        .blog_commands
        .update_category(id, payload.into())
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .blog_commands
        .delete_category(id)
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
