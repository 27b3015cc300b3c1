use super::BlogCommandService;
use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{ContentKind, NewPage, PageId, Slug, Title},
};

#[derive(Debug, Clone)]
pub struct SavePageCommand {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub is_published: bool,
}

impl BlogCommandService {
    pub async fn create_page(&self, command: SavePageCommand) -> ApplicationResult<PageDto> {
        let title = Title::new(command.title)?;
        let slug = self
            .pipeline
            .before_write(
                ContentKind::Page,
                Slug::parse_optional(command.slug)?,
                title.as_str(),
            )
            .await?;

        let created = self
            .pages
            .insert(NewPage {
                title,
                slug,
                is_published: command.is_published,
                content: command.content,
            })
            .await
            .map_err(ApplicationError::from_write)?;
        tracing::info!(id = %created.id, slug = %created.slug, "created page");
        Ok(created.into())
    }

    pub async fn update_page(&self, id: i64, command: SavePageCommand) -> ApplicationResult<PageDto> {
        let id = PageId::new(id)?;
        let mut page = self
            .pages
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        page.title = Title::new(command.title)?;
        page.content = command.content;
        page.is_published = command.is_published;
        if let Some(raw) = command.slug {
            page.slug = self
                .pipeline
                .before_write(
                    ContentKind::Page,
                    Slug::parse_optional(Some(raw))?,
                    page.title.as_str(),
                )
                .await?;
        }

        let saved = self
            .pages
            .update(&page)
            .await
            .map_err(ApplicationError::from_write)?;
        tracing::info!(id = %saved.id, "updated page");
        Ok(saved.into())
    }

    pub async fn set_page_published(&self, id: i64, published: bool) -> ApplicationResult<PageDto> {
        let id = PageId::new(id)?;
        let mut page = self
            .pages
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        page.is_published = published;
        let saved = self
            .pages
            .update(&page)
            .await
            .map_err(ApplicationError::from_write)?;
        Ok(saved.into())
    }

    pub async fn delete_page(&self, id: i64) -> ApplicationResult<()> {
        let id = PageId::new(id)?;
        self.pages.delete(id).await?;
        tracing::info!(%id, "deleted page");
        Ok(())
    }
}
