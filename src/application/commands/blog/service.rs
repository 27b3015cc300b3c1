use std::sync::Arc;

use crate::{
    application::{pipeline::SavePipeline, ports::time::Clock},
    domain::blog::{CategoryRepository, PageRepository, PostRepository, TagRepository},
};

pub struct BlogCommandService {
    pub(super) tags: Arc<dyn TagRepository>,
    pub(super) categories: Arc<dyn CategoryRepository>,
    pub(super) pages: Arc<dyn PageRepository>,
    pub(super) posts: Arc<dyn PostRepository>,
    pub(super) pipeline: Arc<SavePipeline>,
    pub(super) clock: Arc<dyn Clock>,
}

impl BlogCommandService {
    pub fn new(
        tags: Arc<dyn TagRepository>,
        categories: Arc<dyn CategoryRepository>,
        pages: Arc<dyn PageRepository>,
        posts: Arc<dyn PostRepository>,
        pipeline: Arc<SavePipeline>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tags,
            categories,
            pages,
            posts,
            pipeline,
            clock,
        }
    }
}
