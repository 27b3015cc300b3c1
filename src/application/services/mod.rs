// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{blog::BlogCommandService, site_setup::SiteSetupCommandService},
        pipeline::{SavePipeline, SlugPolicy},
        ports::{
            media::{ImageCodec, MediaStorage, UploadValidator},
            time::Clock,
            util::{SlugGenerator, SuffixGenerator},
        },
        queries::{admin::AdminQueryService, blog::BlogQueryService, site::SiteQueryService},
    },
    domain::{
        blog::{CategoryRepository, PageRepository, PostRepository, SlugIndex, TagRepository},
        site_setup::SiteSetupRepository,
    },
};

/// Repositories the services are built on.
pub struct Repositories {
    pub tags: Arc<dyn TagRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub pages: Arc<dyn PageRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub slug_index: Arc<dyn SlugIndex>,
    pub site_setups: Arc<dyn SiteSetupRepository>,
}

/// Non-database collaborators.
pub struct Ports {
    pub storage: Arc<dyn MediaStorage>,
    pub codec: Arc<dyn ImageCodec>,
    pub favicon_validator: Arc<dyn UploadValidator>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
    pub suffixes: Arc<dyn SuffixGenerator>,
}

pub struct ApplicationServices {
    pub blog_commands: Arc<BlogCommandService>,
    pub site_commands: Arc<SiteSetupCommandService>,
    pub blog_queries: Arc<BlogQueryService>,
    pub admin_queries: Arc<AdminQueryService>,
    pub site_queries: Arc<SiteQueryService>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports, policy: SlugPolicy) -> Self {
        let pipeline = Arc::new(SavePipeline::new(
            Arc::clone(&repos.slug_index),
            Arc::clone(&ports.slugger),
            Arc::clone(&ports.suffixes),
            Arc::clone(&ports.storage),
            Arc::clone(&ports.codec),
            Arc::clone(&ports.clock),
            policy,
        ));

        let blog_commands = Arc::new(BlogCommandService::new(
            Arc::clone(&repos.tags),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.pages),
            Arc::clone(&repos.posts),
            Arc::clone(&pipeline),
            Arc::clone(&ports.clock),
        ));

        let site_commands = Arc::new(SiteSetupCommandService::new(
            Arc::clone(&repos.site_setups),
            Arc::clone(&pipeline),
            Arc::clone(&ports.favicon_validator),
        ));

        let blog_queries = Arc::new(BlogQueryService::new(
            Arc::clone(&repos.tags),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.pages),
            Arc::clone(&repos.posts),
        ));
        let admin_queries = Arc::new(AdminQueryService::new(
            Arc::clone(&repos.tags),
            Arc::clone(&repos.categories),
            Arc::clone(&repos.pages),
            Arc::clone(&repos.posts),
        ));
        let site_queries = Arc::new(SiteQueryService::new(Arc::clone(&repos.site_setups)));

        Self {
            blog_commands,
            site_commands,
            blog_queries,
            admin_queries,
            site_queries,
        }
    }
}
