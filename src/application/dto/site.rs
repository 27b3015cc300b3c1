use crate::domain::site_setup::{MenuLink, SiteSetup};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSetupDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub show_header: bool,
    pub show_search: bool,
    pub show_menu: bool,
    pub show_description: bool,
    pub show_pagination: bool,
    pub show_footer: bool,
    pub favicon: String,
}

impl From<SiteSetup> for SiteSetupDto {
    fn from(setup: SiteSetup) -> Self {
        Self {
            id: setup.id.into(),
            title: setup.title.into_inner(),
            description: setup.description.into_inner(),
            show_header: setup.flags.show_header,
            show_search: setup.flags.show_search,
            show_menu: setup.flags.show_menu,
            show_description: setup.flags.show_description,
            show_pagination: setup.flags.show_pagination,
            show_footer: setup.flags.show_footer,
            favicon: setup.favicon.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuLinkDto {
    pub id: i64,
    pub text: String,
    pub url_or_path: String,
    pub new_tab: bool,
    pub site_setup_id: Option<i64>,
}

impl From<MenuLink> for MenuLinkDto {
    fn from(link: MenuLink) -> Self {
        Self {
            id: link.id.into(),
            text: link.text.into_inner(),
            url_or_path: link.url_or_path.into_inner(),
            new_tab: link.new_tab,
            site_setup_id: link.site_setup_id.map(Into::into),
        }
    }
}

/// Site-wide data every rendered response is built with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContextDto {
    pub setup: Option<SiteSetupDto>,
    pub menu_links: Vec<MenuLinkDto>,
}

impl SiteContextDto {
    pub fn empty() -> Self {
        Self {
            setup: None,
            menu_links: Vec::new(),
        }
    }
}
