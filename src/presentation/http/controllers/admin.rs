use crate::application::{dto::AdminListDto, error::ApplicationError, queries::admin::AdminListQuery};
use crate::domain::blog::ContentKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct AdminListParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub category: Option<i64>,
}

pub async fn list(
    Extension(state): Extension<HttpState>,
    Path(kind): Path<String>,
    Query(params): Query<AdminListParams>,
) -> HttpResult<Json<AdminListDto>> {
    let kind = kind
        .parse::<ContentKind>()
        .map_err(ApplicationError::from)
        .into_http()?;
    let query = AdminListQuery {
        q: params.q,
        page: params.page.unwrap_or(1),
        is_published: params.is_published,
        category: params.category,
    };

    state
        .services
        .admin_queries
        .list(kind, query)
        .await
        .into_http()
        .map(Json)
}
