// src/application/pipeline/mod.rs
//! The steps every persistence flow runs around its row write: slug
//! assignment before it, upload storage and image normalisation around it.

mod resizer;
mod slug;

pub use resizer::{ImageChangeResizer, ResizeOutcome, has_changed};
pub use slug::SlugAssigner;

use std::sync::Arc;

use crate::application::{
    ApplicationResult,
    ports::{
        media::{ImageCodec, MediaStorage},
        time::Clock,
        util::{SlugGenerator, SuffixGenerator},
    },
};
use crate::domain::blog::{ContentKind, Slug, SlugIndex};
use crate::domain::media::{ImageRef, ImageUpload, ResizeSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    pub suffix_length: usize,
    pub max_attempts: u32,
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            suffix_length: 4,
            max_attempts: 10,
        }
    }
}

pub struct SavePipeline {
    slugs: SlugAssigner,
    resizer: ImageChangeResizer,
    storage: Arc<dyn MediaStorage>,
    clock: Arc<dyn Clock>,
    suffix_length: usize,
}

impl SavePipeline {
    pub fn new(
        index: Arc<dyn SlugIndex>,
        generator: Arc<dyn SlugGenerator>,
        suffixes: Arc<dyn SuffixGenerator>,
        storage: Arc<dyn MediaStorage>,
        codec: Arc<dyn ImageCodec>,
        clock: Arc<dyn Clock>,
        policy: SlugPolicy,
    ) -> Self {
        Self {
            slugs: SlugAssigner::new(index, generator, suffixes, policy.max_attempts),
            resizer: ImageChangeResizer::new(Arc::clone(&storage), codec),
            storage,
            clock,
            suffix_length: policy.suffix_length,
        }
    }

    /// Keep `current` when present, otherwise derive a fresh slug from `source`.
    pub async fn before_write(
        &self,
        kind: ContentKind,
        current: Option<Slug>,
        source: &str,
    ) -> ApplicationResult<Slug> {
        match current {
            Some(slug) => Ok(slug),
            None => self.slugs.assign(kind, source, self.suffix_length).await,
        }
    }

    /// Write a pending upload under the field's dated directory.
    pub async fn store_upload(
        &self,
        upload_to: &str,
        upload: &ImageUpload,
    ) -> ApplicationResult<ImageRef> {
        let directory = self.clock.now().format(upload_to).to_string();
        let name = self
            .storage
            .save(&directory, &upload.filename, &upload.bytes)
            .await?;
        Ok(ImageRef::new(name)?)
    }

    /// Best-effort removal of an upload whose row write failed.
    pub async fn discard_upload(&self, image: &ImageRef) {
        if image.is_empty() {
            return;
        }
        if let Err(err) = self.storage.delete(image.name()).await {
            tracing::warn!(image = %image, error = %err, "failed to remove orphaned upload");
        }
    }

    /// Second write of the two-phase save. The row is already committed when
    /// this runs, so a failure leaves it pointing at the unresized upload.
    pub async fn after_write(
        &self,
        kind: &str,
        previous_name: &str,
        field: &ImageRef,
        spec: &ResizeSpec,
    ) -> ApplicationResult<ResizeOutcome> {
        self.resizer
            .on_after_persist(previous_name, field, spec)
            .await
            .inspect_err(|err| {
                tracing::warn!(
                    entity = kind,
                    image = %field,
                    error = %err,
                    "row saved but image post-processing failed"
                );
            })
    }
}
