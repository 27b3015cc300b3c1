use crate::domain::blog::value_objects::{
    CategoryId, DisplayName, Excerpt, PageId, PostId, Slug, TagId, Title, UserId,
};
use crate::domain::media::ImageRef;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Tag {
    pub id: TagId,
    pub name: DisplayName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: DisplayName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: DisplayName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: DisplayName,
    pub slug: Slug,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub title: Title,
    pub slug: Slug,
    pub is_published: bool,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: Title,
    pub slug: Slug,
    pub is_published: bool,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: Title,
    pub slug: Slug,
    pub excerpt: Excerpt,
    pub is_published: bool,
    pub content: String,
    pub cover: ImageRef,
    pub cover_in_post_content: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
}

impl Post {
    pub fn set_published(&mut self, published: bool, now: DateTime<Utc>) {
        self.is_published = published;
        self.updated_at = now;
    }

    /// Record an edit by `actor`. `created_*` fields are never touched here.
    pub fn touch(&mut self, actor: Option<UserId>, now: DateTime<Utc>) {
        self.updated_by = actor;
        self.updated_at = now;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: Title,
    pub slug: Slug,
    pub excerpt: Excerpt,
    pub is_published: bool,
    pub content: String,
    pub cover: ImageRef,
    pub cover_in_post_content: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<UserId>,
    pub category_id: Option<CategoryId>,
    pub tag_ids: Vec<TagId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_post() -> Post {
        let now = Utc::now();
        Post {
            id: PostId::new(1).unwrap(),
            title: Title::new("Hello").unwrap(),
            slug: Slug::new("hello-ab12").unwrap(),
            excerpt: Excerpt::new("short").unwrap(),
            is_published: false,
            content: String::new(),
            cover: ImageRef::empty(),
            cover_in_post_content: true,
            created_at: now,
            updated_at: now,
            created_by: Some(UserId::new(3).unwrap()),
            updated_by: None,
            category_id: None,
            tag_ids: vec![],
        }
    }

    #[test]
    fn touch_records_editor_without_changing_creator() {
        let mut post = sample_post();
        let later = post.updated_at + Duration::seconds(30);
        post.touch(Some(UserId::new(9).unwrap()), later);
        assert_eq!(post.created_by, Some(UserId::new(3).unwrap()));
        assert_eq!(post.updated_by, Some(UserId::new(9).unwrap()));
        assert_eq!(post.updated_at, later);
    }

    #[test]
    fn set_published_bumps_updated_at() {
        let mut post = sample_post();
        let later = post.updated_at + Duration::seconds(5);
        post.set_published(true, later);
        assert!(post.is_published);
        assert_eq!(post.updated_at, later);
    }
}
