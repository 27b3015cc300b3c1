pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Category, NewCategory, NewPage, NewPost, NewTag, Page, Post, Tag};
pub use repository::{
    CategoryRepository, ListFilter, PageRepository, PostRepository, SlugIndex, TagRepository,
};
pub use value_objects::{
    CategoryId, ContentKind, DisplayName, Excerpt, PageId, PostId, Slug, TagId, Title, UserId,
};
