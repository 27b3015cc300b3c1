use std::sync::Arc;

use crate::application::{
    ApplicationError, ApplicationResult,
    ports::media::{ImageCodec, MediaStorage},
};
use crate::domain::media::{ImageRef, ResizeSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// The field is empty or kept the name it had before the save.
    Unchanged,
    /// The new image already fits the resize bounds; nothing was rewritten.
    WithinBounds,
    Resized { width: u32, height: u32 },
}

/// A field counts as changed when its stored name differs across the save,
/// including the transition from no image to an image.
pub fn has_changed(previous_name: &str, field: &ImageRef) -> bool {
    previous_name != field.name()
}

/// Rewrites a freshly stored image so it satisfies its field's [`ResizeSpec`].
pub struct ImageChangeResizer {
    storage: Arc<dyn MediaStorage>,
    codec: Arc<dyn ImageCodec>,
}

impl ImageChangeResizer {
    pub fn new(storage: Arc<dyn MediaStorage>, codec: Arc<dyn ImageCodec>) -> Self {
        Self { storage, codec }
    }

    /// Must run after the row write so `field` carries the name storage
    /// actually assigned.
    pub async fn on_after_persist(
        &self,
        previous_name: &str,
        field: &ImageRef,
        spec: &ResizeSpec,
    ) -> ApplicationResult<ResizeOutcome> {
        if field.is_empty() || !has_changed(previous_name, field) {
            tracing::debug!(image = %field, "image unchanged, skipping resize");
            return Ok(ResizeOutcome::Unchanged);
        }

        let bytes = self.storage.read(field.name()).await?;
        let codec = Arc::clone(&self.codec);
        let spec = *spec;

        let processed = tokio::task::spawn_blocking(move || {
            let raster = codec.decode(&bytes)?;
            let (width, height) = raster.dimensions();
            if !spec.needs_resize(width, height) {
                return Ok::<_, ApplicationError>(None);
            }
            let resized = codec.resize(raster, &spec);
            let dimensions = resized.dimensions();
            let encoded = codec.encode(&resized, spec.quality)?;
            Ok(Some((encoded, dimensions)))
        })
        .await
        .map_err(|err| ApplicationError::resize_failure(format!("resize task failed: {err}")))??;

        let Some((encoded, (width, height))) = processed else {
            tracing::debug!(image = %field, "image already within bounds");
            return Ok(ResizeOutcome::WithinBounds);
        };

        self.storage.overwrite(field.name(), &encoded).await?;
        tracing::info!(image = %field, width, height, "resized image");
        Ok(ResizeOutcome::Resized { width, height })
    }
}
