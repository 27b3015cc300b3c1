use std::sync::Arc;

use crate::{
    application::{
        dto::{MenuLinkDto, SiteContextDto, SiteSetupDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::site_setup::{SiteSetupId, SiteSetupRepository},
};

pub struct SiteQueryService {
    repo: Arc<dyn SiteSetupRepository>,
}

impl SiteQueryService {
    pub fn new(repo: Arc<dyn SiteSetupRepository>) -> Self {
        Self { repo }
    }

    /// The most recent setup and its menu. Resolved once per request by the
    /// HTTP layer and handed to handlers explicitly.
    pub async fn current_context(&self) -> ApplicationResult<SiteContextDto> {
        let Some(setup) = self.repo.latest().await? else {
            return Ok(SiteContextDto::empty());
        };
        let menu_links = self.repo.menu_links(setup.id).await?;
        Ok(SiteContextDto {
            setup: Some(setup.into()),
            menu_links: menu_links.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn list_setups(&self) -> ApplicationResult<Vec<SiteSetupDto>> {
        let setups = self.repo.list().await?;
        Ok(setups.into_iter().map(Into::into).collect())
    }

    pub async fn get_setup(&self, id: i64) -> ApplicationResult<SiteSetupDto> {
        self.repo
            .find_by_id(SiteSetupId::new(id)?)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("site setup not found"))
    }

    pub async fn menu_links(&self, setup_id: i64) -> ApplicationResult<Vec<MenuLinkDto>> {
        let links = self.repo.menu_links(SiteSetupId::new(setup_id)?).await?;
        Ok(links.into_iter().map(Into::into).collect())
    }
}
