use std::sync::Arc;

use crate::{
    application::{pipeline::SavePipeline, ports::media::UploadValidator},
    domain::site_setup::SiteSetupRepository,
};

pub struct SiteSetupCommandService {
    pub(super) repo: Arc<dyn SiteSetupRepository>,
    pub(super) pipeline: Arc<SavePipeline>,
    pub(super) favicon_validator: Arc<dyn UploadValidator>,
}

impl SiteSetupCommandService {
    pub fn new(
        repo: Arc<dyn SiteSetupRepository>,
        pipeline: Arc<SavePipeline>,
        favicon_validator: Arc<dyn UploadValidator>,
    ) -> Self {
        Self {
            repo,
            pipeline,
            favicon_validator,
        }
    }
}
