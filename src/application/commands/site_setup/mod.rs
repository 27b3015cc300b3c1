mod menu_links;
mod save;
mod service;

pub use menu_links::AddMenuLinkCommand;
pub use save::SaveSiteSetupCommand;
pub use service::SiteSetupCommandService;
