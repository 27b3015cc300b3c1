// src/application/ports/media.rs
use crate::application::ApplicationResult;
use crate::domain::media::{ImageUpload, ResizeSpec};
use async_trait::async_trait;
use image::{DynamicImage, GenericImageView, ImageFormat};

/// Path-addressed binary storage for uploaded images.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store `bytes` as `directory/filename` and return the name actually
    /// used, which differs from the requested one when that name is taken.
    async fn save(&self, directory: &str, filename: &str, bytes: &[u8])
    -> ApplicationResult<String>;
    async fn read(&self, name: &str) -> ApplicationResult<Vec<u8>>;
    async fn overwrite(&self, name: &str, bytes: &[u8]) -> ApplicationResult<()>;
    async fn delete(&self, name: &str) -> ApplicationResult<()>;
}

/// A decoded image together with the format it was stored in.
#[derive(Debug, Clone)]
pub struct Raster {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

impl Raster {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

pub trait ImageCodec: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> ApplicationResult<Raster>;
    fn resize(&self, raster: Raster, spec: &ResizeSpec) -> Raster;
    /// Encode in the raster's own format; `quality` applies to lossy formats.
    fn encode(&self, raster: &Raster, quality: Option<u8>) -> ApplicationResult<Vec<u8>>;
}

/// Rejects uploads a field does not accept before anything is written.
pub trait UploadValidator: Send + Sync {
    fn validate(&self, upload: &ImageUpload) -> ApplicationResult<()>;
}
