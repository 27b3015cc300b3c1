// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod pages;
pub mod posts;
pub mod site;
pub mod taxonomy;
pub mod uploads;

use crate::application::dto::SiteContextDto;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: Option<u32>,
}

impl PageParams {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Public responses carry the site context they were rendered with.
#[derive(Debug, Serialize)]
pub struct PublicView<T> {
    pub site: SiteContextDto,
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub is_published: bool,
}
