// src/presentation/http/controllers/posts.rs
use super::{
    PageParams, PublicView, PublishRequest,
    uploads::{ImageUploadDto, image_change},
};
use crate::application::{
    commands::blog::SavePostCommand,
    dto::{Paginated, PostDto},
    queries::blog::PublicPostsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Actor, SiteContext};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct PostRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default = "default_true")]
    pub cover_in_post_content: bool,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub tag_ids: Vec<i64>,
    #[serde(default)]
    pub cover: Option<ImageUploadDto>,
    #[serde(default)]
    pub clear_cover: bool,
}

impl PostRequest {
    fn into_command(self, max_upload_bytes: usize) -> HttpResult<SavePostCommand> {
        let cover = image_change(self.cover, self.clear_cover, max_upload_bytes)?;
        Ok(SavePostCommand {
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            is_published: self.is_published,
            cover_in_post_content: self.cover_in_post_content,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
            cover,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PublicPostsParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Paginated<PostDto>>> {
    state
        .services
        .blog_queries
        .list_posts(params.page())
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .blog_queries
        .get_post(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Actor(actor): Actor,
    Json(payload): Json<PostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = payload.into_command(state.max_upload_bytes)?;
    let post = state
        .services
        .blog_commands
        .create_post(actor, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Actor(actor): Actor,
    Path(id): Path<i64>,
    Json(payload): Json<PostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = payload.into_command(state.max_upload_bytes)?;
    state
        .services
        .blog_commands
        .update_post(actor, id, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn set_post_published(
    Extension(state): Extension<HttpState>,
    Actor(actor): Actor,
    Path(id): Path<i64>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .blog_commands
        .set_post_published(actor, id, payload.is_published)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .blog_commands
        .delete_post(id)
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn public_post(
    Extension(state): Extension<HttpState>,
    SiteContext(site): SiteContext,
    Path(slug): Path<String>,
) -> HttpResult<Json<PublicView<PostDto>>> {
    let post = state
        .services
        .blog_queries
        .public_post(slug)
        .await
        .into_http()?;
    Ok(Json(PublicView { site, data: post }))
}

pub async fn list_public_posts(
    Extension(state): Extension<HttpState>,
    SiteContext(site): SiteContext,
    Query(params): Query<PublicPostsParams>,
) -> HttpResult<Json<PublicView<Paginated<PostDto>>>> {
    let query = PublicPostsQuery {
        page: params.page.unwrap_or(1).max(1),
        q: params.q,
        category: params.category,
        tag: params.tag,
    };
    let posts = state
        .services
        .blog_queries
        .list_public_posts(query)
        .await
        .into_http()?;
    Ok(Json(PublicView { site, data: posts }))
}
