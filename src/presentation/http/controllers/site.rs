use super::uploads::{ImageUploadDto, image_change};
use crate::application::{
    commands::site_setup::{AddMenuLinkCommand, SaveSiteSetupCommand},
    dto::{MenuLinkDto, SiteContextDto, SiteSetupDto},
};
use crate::domain::site_setup::DisplayFlags;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::SiteContext;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::json;

fn shown() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct SiteSetupRequest {
    pub title: String,
    pub description: String,
    #[serde(default = "shown")]
    pub show_header: bool,
    #[serde(default = "shown")]
    pub show_search: bool,
    #[serde(default = "shown")]
    pub show_menu: bool,
    #[serde(default = "shown")]
    pub show_description: bool,
    #[serde(default = "shown")]
    pub show_pagination: bool,
    #[serde(default = "shown")]
    pub show_footer: bool,
    #[serde(default)]
    pub favicon: Option<ImageUploadDto>,
    #[serde(default)]
    pub clear_favicon: bool,
}

impl SiteSetupRequest {
    fn into_command(self, max_upload_bytes: usize) -> HttpResult<SaveSiteSetupCommand> {
        let favicon = image_change(self.favicon, self.clear_favicon, max_upload_bytes)?;
        Ok(SaveSiteSetupCommand {
            title: self.title,
            description: self.description,
            flags: DisplayFlags {
                show_header: self.show_header,
                show_search: self.show_search,
                show_menu: self.show_menu,
                show_description: self.show_description,
                show_pagination: self.show_pagination,
                show_footer: self.show_footer,
            },
            favicon,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct MenuLinkRequest {
    pub text: String,
    pub url_or_path: String,
    #[serde(default)]
    pub new_tab: bool,
}

pub async fn current_site(SiteContext(site): SiteContext) -> Json<SiteContextDto> {
    Json(site)
}

pub async fn list_site_setups(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<SiteSetupDto>>> {
    state
        .services
        .site_queries
        .list_setups()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_site_setup(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<SiteSetupDto>> {
    state
        .services
        .site_queries
        .get_setup(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_site_setup(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SiteSetupRequest>,
) -> HttpResult<(StatusCode, Json<SiteSetupDto>)> {
    let command = payload.into_command(state.max_upload_bytes)?;
    let setup = state
        .services
        .site_commands
        .create_site_setup(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(setup)))
}

pub async fn update_site_setup(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<SiteSetupRequest>,
) -> HttpResult<Json<SiteSetupDto>> {
    let command = payload.into_command(state.max_upload_bytes)?;
    state
        .services
        .site_commands
        .update_site_setup(id, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_site_setup(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .site_commands
        .delete_site_setup(id)
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}

pub async fn list_menu_links(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Vec<MenuLinkDto>>> {
    state
        .services
        .site_queries
        .menu_links(id)
        .await
        .into_http()
        .map(Json)
}

pub async fn add_menu_link(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuLinkRequest>,
) -> HttpResult<(StatusCode, Json<MenuLinkDto>)> {
    let link = state
        .services
        .site_commands
        .add_menu_link(
            id,
            AddMenuLinkCommand {
                text: payload.text,
                url_or_path: payload.url_or_path,
                new_tab: payload.new_tab,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn delete_menu_link(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .site_commands
        .delete_menu_link(id)
        .await
        .into_http()?;
    Ok(Json(json!({ "status": "deleted" })))
}
