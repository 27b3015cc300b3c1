use super::BlogCommandService;
use crate::{
    application::{
        commands::ImageChange,
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::{CategoryId, ContentKind, Excerpt, NewPost, Post, PostId, Slug, TagId, Title, UserId},
        media::{ImageRef, POST_COVER_UPLOAD_TO, ResizeSpec},
    },
};

#[derive(Debug, Clone)]
pub struct SavePostCommand {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: String,
    pub content: String,
    pub is_published: bool,
    pub cover_in_post_content: bool,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
    pub cover: ImageChange,
}

struct PostFields {
    title: Title,
    excerpt: Excerpt,
    category_id: Option<CategoryId>,
    tag_ids: Vec<TagId>,
}

impl BlogCommandService {
    pub async fn create_post(
        &self,
        actor: Option<UserId>,
        command: SavePostCommand,
    ) -> ApplicationResult<PostDto> {
        let fields = self.validate_post_fields(&command).await?;
        let slug = self
            .pipeline
            .before_write(
                ContentKind::Post,
                Slug::parse_optional(command.slug)?,
                fields.title.as_str(),
            )
            .await?;

        let cover = match &command.cover {
            ImageChange::Replace(upload) => {
                self.pipeline.store_upload(POST_COVER_UPLOAD_TO, upload).await?
            }
            ImageChange::Keep | ImageChange::Clear => ImageRef::empty(),
        };

        let now = self.clock.now();
        let new_post = NewPost {
            title: fields.title,
            slug,
            excerpt: fields.excerpt,
            is_published: command.is_published,
            content: command.content,
            cover: cover.clone(),
            cover_in_post_content: command.cover_in_post_content,
            created_at: now,
            updated_at: now,
            created_by: actor,
            category_id: fields.category_id,
            tag_ids: fields.tag_ids,
        };

        let created = match self.posts.insert(new_post).await {
            Ok(created) => created,
            Err(err) => {
                self.pipeline.discard_upload(&cover).await;
                return Err(ApplicationError::from_write(err));
            }
        };
        tracing::info!(id = %created.id, slug = %created.slug, "created post");

        self.pipeline
            .after_write("post", "", &created.cover, &ResizeSpec::POST_COVER)
            .await?;
        Ok(created.into())
    }

    pub async fn update_post(
        &self,
        actor: Option<UserId>,
        id: i64,
        command: SavePostCommand,
    ) -> ApplicationResult<PostDto> {
        let mut post = self.load_post(id).await?;
        let previous_cover = post.cover.name().to_owned();
        let fields = self.validate_post_fields(&command).await?;

        post.title = fields.title;
        post.excerpt = fields.excerpt;
        post.content = command.content;
        post.is_published = command.is_published;
        post.cover_in_post_content = command.cover_in_post_content;
        post.category_id = fields.category_id;
        post.tag_ids = fields.tag_ids;
        if let Some(raw) = command.slug {
            post.slug = self
                .pipeline
                .before_write(
                    ContentKind::Post,
                    Slug::parse_optional(Some(raw))?,
                    post.title.as_str(),
                )
                .await?;
        }

        let uploaded = match &command.cover {
            ImageChange::Keep => None,
            ImageChange::Clear => {
                post.cover = ImageRef::empty();
                None
            }
            ImageChange::Replace(upload) => {
                let stored = self.pipeline.store_upload(POST_COVER_UPLOAD_TO, upload).await?;
                post.cover = stored.clone();
                Some(stored)
            }
        };
        post.touch(actor, self.clock.now());

        let saved = match self.posts.update(&post).await {
            Ok(saved) => saved,
            Err(err) => {
                if let Some(stored) = &uploaded {
                    self.pipeline.discard_upload(stored).await;
                }
                return Err(ApplicationError::from_write(err));
            }
        };
        tracing::info!(id = %saved.id, "updated post");

        self.pipeline
            .after_write("post", &previous_cover, &saved.cover, &ResizeSpec::POST_COVER)
            .await?;
        Ok(saved.into())
    }

    pub async fn set_post_published(
        &self,
        actor: Option<UserId>,
        id: i64,
        published: bool,
    ) -> ApplicationResult<PostDto> {
        let mut post = self.load_post(id).await?;
        let now = self.clock.now();
        post.set_published(published, now);
        post.touch(actor, now);

        let saved = self
            .posts
            .update(&post)
            .await
            .map_err(ApplicationError::from_write)?;
        Ok(saved.into())
    }

    pub async fn delete_post(&self, id: i64) -> ApplicationResult<()> {
        let id = PostId::new(id)?;
        self.posts.delete(id).await?;
        tracing::info!(%id, "deleted post");
        Ok(())
    }

    async fn load_post(&self, id: i64) -> ApplicationResult<Post> {
        let id = PostId::new(id)?;
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    async fn validate_post_fields(&self, command: &SavePostCommand) -> ApplicationResult<PostFields> {
        let title = Title::new(command.title.clone())?;
        let excerpt = Excerpt::new(command.excerpt.clone())?;

        let category_id = match command.category_id {
            Some(raw) => {
                let id = CategoryId::new(raw)?;
                if self.categories.find_by_id(id).await?.is_none() {
                    return Err(ApplicationError::validation(format!(
                        "category {id} does not exist"
                    )));
                }
                Some(id)
            }
            None => None,
        };

        let mut tag_ids = Vec::with_capacity(command.tag_ids.len());
        for raw in &command.tag_ids {
            let id = TagId::new(*raw)?;
            if tag_ids.contains(&id) {
                continue;
            }
            if self.tags.find_by_id(id).await?.is_none() {
                return Err(ApplicationError::validation(format!("tag {id} does not exist")));
            }
            tag_ids.push(id);
        }
        tag_ids.sort_unstable();

        Ok(PostFields {
            title,
            excerpt,
            category_id,
            tag_ids,
        })
    }
}
