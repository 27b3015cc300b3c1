use super::BlogCommandService;
use crate::{
    application::{
        dto::{CategoryDto, TagDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::blog::{CategoryId, ContentKind, DisplayName, NewCategory, NewTag, Slug, TagId},
};

/// Create or update a tag or a category.
///
/// `slug: None` keeps the current slug on update; a blank slug asks for a new
/// one to be generated from `name`.
#[derive(Debug, Clone)]
pub struct SaveTermCommand {
    pub name: String,
    pub slug: Option<String>,
}

impl BlogCommandService {
    pub async fn create_tag(&self, command: SaveTermCommand) -> ApplicationResult<TagDto> {
        let name = DisplayName::new(command.name)?;
        let slug = self
            .pipeline
            .before_write(
                ContentKind::Tag,
                Slug::parse_optional(command.slug)?,
                name.as_str(),
            )
            .await?;

        let created = self
            .tags
            .insert(NewTag { name, slug })
            .await
            .map_err(ApplicationError::from_write)?;
        tracing::info!(id = %created.id, slug = %created.slug, "created tag");
        Ok(created.into())
    }

    pub async fn update_tag(&self, id: i64, command: SaveTermCommand) -> ApplicationResult<TagDto> {
        let id = TagId::new(id)?;
        let mut tag = self
            .tags
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        tag.name = DisplayName::new(command.name)?;
        if let Some(raw) = command.slug {
            tag.slug = self
                .pipeline
                .before_write(
                    ContentKind::Tag,
                    Slug::parse_optional(Some(raw))?,
                    tag.name.as_str(),
                )
                .await?;
        }

        let saved = self
            .tags
            .update(&tag)
            .await
            .map_err(ApplicationError::from_write)?;
        tracing::info!(id = %saved.id, "updated tag");
        Ok(saved.into())
    }

    pub async fn delete_tag(&self, id: i64) -> ApplicationResult<()> {
        let id = TagId::new(id)?;
        self.tags.delete(id).await?;
        tracing::info!(%id, "deleted tag");
        Ok(())
    }

    pub async fn create_category(
        &self,
        command: SaveTermCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = DisplayName::new(command.name)?;
        let slug = self
            .pipeline
            .before_write(
                ContentKind::Category,
                Slug::parse_optional(command.slug)?,
                name.as_str(),
            )
            .await?;

        let created = self
            .categories
            .insert(NewCategory { name, slug })
            .await
            .map_err(ApplicationError::from_write)?;
        tracing::info!(id = %created.id, slug = %created.slug, "created category");
        Ok(created.into())
    }

    pub async fn update_category(
        &self,
        id: i64,
        command: SaveTermCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(id)?;
        let mut category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("category not found"))?;

        category.name = DisplayName::new(command.name)?;
        if let Some(raw) = command.slug {
            category.slug = self
                .pipeline
                .before_write(
                    ContentKind::Category,
                    Slug::parse_optional(Some(raw))?,
                    category.name.as_str(),
                )
                .await?;
        }

        let saved = self
            .categories
            .update(&category)
            .await
            .map_err(ApplicationError::from_write)?;
        tracing::info!(id = %saved.id, "updated category");
        Ok(saved.into())
    }

    /// Posts in the category keep existing with no category.
    pub async fn delete_category(&self, id: i64) -> ApplicationResult<()> {
        let id = CategoryId::new(id)?;
        self.categories.delete(id).await?;
        tracing::info!(%id, "deleted category");
        Ok(())
    }
}
