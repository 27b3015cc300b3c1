pub mod entity;
pub mod repository;

pub use entity::{
    DisplayFlags, MenuLink, MenuLinkId, MenuText, NewMenuLink, NewSiteSetup, SiteDescription,
    SiteSetup, SiteSetupId, UrlOrPath,
};
pub use repository::SiteSetupRepository;
