use crate::domain::errors::DomainResult;
use crate::domain::site_setup::entity::{
    MenuLink, MenuLinkId, NewMenuLink, NewSiteSetup, SiteSetup, SiteSetupId,
};
use async_trait::async_trait;

#[async_trait]
pub trait SiteSetupRepository: Send + Sync {
    async fn insert(&self, setup: NewSiteSetup) -> DomainResult<SiteSetup>;
    async fn update(&self, setup: &SiteSetup) -> DomainResult<SiteSetup>;
    /// Deleting a setup also deletes its menu links.
    async fn delete(&self, id: SiteSetupId) -> DomainResult<()>;
    async fn find_by_id(&self, id: SiteSetupId) -> DomainResult<Option<SiteSetup>>;
    /// The setup with the highest id, which is the one the site renders with.
    async fn latest(&self) -> DomainResult<Option<SiteSetup>>;
    async fn list(&self) -> DomainResult<Vec<SiteSetup>>;

    async fn insert_menu_link(&self, link: NewMenuLink) -> DomainResult<MenuLink>;
    async fn delete_menu_link(&self, id: MenuLinkId) -> DomainResult<()>;
    async fn menu_links(&self, setup_id: SiteSetupId) -> DomainResult<Vec<MenuLink>>;
}
