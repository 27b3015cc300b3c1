use super::SiteSetupCommandService;
use crate::{
    application::{
        commands::ImageChange,
        dto::SiteSetupDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::Title,
        media::{FAVICON_UPLOAD_TO, ImageRef, ResizeSpec},
        site_setup::{DisplayFlags, NewSiteSetup, SiteDescription, SiteSetupId},
    },
};

#[derive(Debug, Clone)]
pub struct SaveSiteSetupCommand {
    pub title: String,
    pub description: String,
    pub flags: DisplayFlags,
    pub favicon: ImageChange,
}

impl SiteSetupCommandService {
    pub async fn create_site_setup(
        &self,
        command: SaveSiteSetupCommand,
    ) -> ApplicationResult<SiteSetupDto> {
        let title = Title::new(command.title)?;
        let description = SiteDescription::new(command.description)?;

        let favicon = match &command.favicon {
            ImageChange::Replace(upload) => {
                self.favicon_validator.validate(upload)?;
                self.pipeline.store_upload(FAVICON_UPLOAD_TO, upload).await?
            }
            ImageChange::Keep | ImageChange::Clear => ImageRef::empty(),
        };

        let created = match self
            .repo
            .insert(NewSiteSetup {
                title,
                description,
                flags: command.flags,
                favicon: favicon.clone(),
            })
            .await
        {
            Ok(created) => created,
            Err(err) => {
                self.pipeline.discard_upload(&favicon).await;
                return Err(ApplicationError::from_write(err));
            }
        };
        tracing::info!(id = %created.id, "created site setup");

        self.pipeline
            .after_write("site_setup", "", &created.favicon, &ResizeSpec::FAVICON)
            .await?;
        Ok(created.into())
    }

    pub async fn update_site_setup(
        &self,
        id: i64,
        command: SaveSiteSetupCommand,
    ) -> ApplicationResult<SiteSetupDto> {
        let id = SiteSetupId::new(id)?;
        let mut setup = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("site setup not found"))?;
        let previous_favicon = setup.favicon.name().to_owned();

        setup.title = Title::new(command.title)?;
        setup.description = SiteDescription::new(command.description)?;
        setup.flags = command.flags;

        let uploaded = match &command.favicon {
            ImageChange::Keep => None,
            ImageChange::Clear => {
                setup.favicon = ImageRef::empty();
                None
            }
            ImageChange::Replace(upload) => {
                self.favicon_validator.validate(upload)?;
                let stored = self.pipeline.store_upload(FAVICON_UPLOAD_TO, upload).await?;
                setup.favicon = stored.clone();
                Some(stored)
            }
        };

        let saved = match self.repo.update(&setup).await {
            Ok(saved) => saved,
            Err(err) => {
                if let Some(stored) = &uploaded {
                    self.pipeline.discard_upload(stored).await;
                }
                return Err(ApplicationError::from_write(err));
            }
        };
        tracing::info!(id = %saved.id, "updated site setup");

        self.pipeline
            .after_write("site_setup", &previous_favicon, &saved.favicon, &ResizeSpec::FAVICON)
            .await?;
        Ok(saved.into())
    }

    pub async fn delete_site_setup(&self, id: i64) -> ApplicationResult<()> {
        let id = SiteSetupId::new(id)?;
        self.repo.delete(id).await?;
        tracing::info!(%id, "deleted site setup");
        Ok(())
    }
}
