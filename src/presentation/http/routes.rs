// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{admin, pages, posts, site, taxonomy};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{delete, get, patch},
};
use serde::Serialize;
use std::{path::PathBuf, time::Duration};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Headroom for the JSON envelope around base64 image data.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty allows any origin.
    pub allowed_origins: Vec<String>,
    /// Served read-only under `/media` when set.
    pub media_root: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    // base64 inflates uploads by 4/3
    let body_limit = state.max_upload_bytes / 3 * 4 + BODY_OVERHEAD_BYTES;

    let mut router = Router::new()
        .route("/health", get(health))
        .route(
            "/api/v1/tags",
            get(taxonomy::list_tags).post(taxonomy::create_tag),
        )
        .route(
            "/api/v1/tags/{id}",
            get(taxonomy::get_tag)
                .put(taxonomy::update_tag)
                .delete(taxonomy::delete_tag),
        )
        .route(
            "/api/v1/categories",
            get(taxonomy::list_categories).post(taxonomy::create_category),
        )
        .route(
            "/api/v1/categories/{id}",
            get(taxonomy::get_category)
                .put(taxonomy::update_category)
                .delete(taxonomy::delete_category),
        )
        .route(
            "/api/v1/pages",
            get(pages::list_pages).post(pages::create_page),
        )
        .route(
            "/api/v1/pages/{id}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        .route(
            "/api/v1/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/api/v1/posts/{id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/api/v1/public/pages/{slug}", get(pages::public_page))
        .route("/api/v1/public/posts", get(posts::list_public_posts))
        .route("/api/v1/public/posts/{slug}", get(posts::public_post))
        .route("/api/v1/site", get(site::current_site))
        .route(
            "/api/v1/site-setups",
            get(site::list_site_setups).post(site::create_site_setup),
        )
        .route(
            "/api/v1/site-setups/{id}",
            get(site::get_site_setup)
                .put(site::update_site_setup)
                .delete(site::delete_site_setup),
        )
        .route(
            "/api/v1/site-setups/{id}/menu-links",
            get(site::list_menu_links).post(site::add_menu_link),
        )
        .route(
            "/api/v1/menu-links/{id}",
            delete(site::delete_menu_link),
        )
        .route("/api/v1/admin/{kind}", get(admin::list))
        .route(
            "/api/v1/admin/pages/{id}/published",
            patch(pages::set_page_published),
        )
        .route(
            "/api/v1/admin/posts/{id}/published",
            patch(posts::set_post_published),
        );

    if let Some(root) = &options.media_root {
        router = router.nest_service("/media", ServeDir::new(root));
    }

    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
