use super::SiteSetupCommandService;
use crate::{
    application::{
        dto::MenuLinkDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::site_setup::{MenuLinkId, MenuText, NewMenuLink, SiteSetupId, UrlOrPath},
};

#[derive(Debug, Clone)]
pub struct AddMenuLinkCommand {
    pub text: String,
    pub url_or_path: String,
    pub new_tab: bool,
}

impl SiteSetupCommandService {
    pub async fn add_menu_link(
        &self,
        setup_id: i64,
        command: AddMenuLinkCommand,
    ) -> ApplicationResult<MenuLinkDto> {
        let setup_id = SiteSetupId::new(setup_id)?;
        if self.repo.find_by_id(setup_id).await?.is_none() {
            return Err(ApplicationError::not_found("site setup not found"));
        }

        let link = self
            .repo
            .insert_menu_link(NewMenuLink {
                text: MenuText::new(command.text)?,
                url_or_path: UrlOrPath::new(command.url_or_path)?,
                new_tab: command.new_tab,
                site_setup_id: Some(setup_id),
            })
            .await
            .map_err(ApplicationError::from_write)?;
        Ok(link.into())
    }

    pub async fn delete_menu_link(&self, id: i64) -> ApplicationResult<()> {
        let id = MenuLinkId::new(id)?;
        self.repo.delete_menu_link(id).await?;
        Ok(())
    }
}
