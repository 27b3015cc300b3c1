use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Stored name of an image in media storage. Empty means "no image".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.starts_with('/') || name.split('/').any(|part| part == "..") {
            return Err(DomainError::Validation(format!(
                "image name must be a relative path inside media storage: {name}"
            )));
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An uploaded file that has not been written to media storage yet.
#[derive(Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> DomainResult<Self> {
        let filename = filename.into();
        if filename.trim().is_empty() {
            return Err(DomainError::Validation("upload filename cannot be empty".into()));
        }
        if bytes.is_empty() {
            return Err(DomainError::Validation("upload is empty".into()));
        }
        Ok(Self { filename, bytes })
    }

    /// Lowercased extension of the original filename, if any.
    pub fn extension(&self) -> Option<String> {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("filename", &self.filename)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Target constraints an image field is normalised to after upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSpec {
    pub width: u32,
    /// Produce exactly `width x width` (scale to cover, centre crop) instead of
    /// only shrinking wide images while keeping their aspect ratio.
    pub force_exact_size: bool,
    /// Encoder quality (1-100) for lossy formats; `None` keeps the codec default.
    pub quality: Option<u8>,
}

impl ResizeSpec {
    pub const POST_COVER: ResizeSpec = ResizeSpec {
        width: 900,
        force_exact_size: true,
        quality: Some(75),
    };

    pub const FAVICON: ResizeSpec = ResizeSpec {
        width: 32,
        force_exact_size: false,
        quality: None,
    };

    /// Whether an image of the given dimensions violates this spec.
    pub fn needs_resize(&self, width: u32, height: u32) -> bool {
        if self.force_exact_size {
            width != self.width || height != self.width
        } else {
            width > self.width
        }
    }

    /// Output dimensions for an image of the given size.
    pub fn target_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        if self.force_exact_size {
            return (self.width, self.width);
        }
        if width <= self.width || width == 0 {
            return (width, height);
        }
        let scaled = (u64::from(self.width) * u64::from(height) + u64::from(width) / 2)
            / u64::from(width);
        (self.width, u32::try_from(scaled.max(1)).unwrap_or(u32::MAX))
    }
}

/// `strftime` directory pattern an image field uploads into.
pub const POST_COVER_UPLOAD_TO: &str = "posts/%Y/%m";
pub const FAVICON_UPLOAD_TO: &str = "assets/favicon/%Y/%m";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_ref_rejects_escaping_paths() {
        assert!(ImageRef::new("../etc/passwd").is_err());
        assert!(ImageRef::new("/abs/cover.jpg").is_err());
        assert!(ImageRef::new("posts/2024/05/cover.jpg").is_ok());
        assert!(ImageRef::new("").unwrap().is_empty());
    }

    #[test]
    fn upload_extension_is_lowercased() {
        let upload = ImageUpload::new("Icon.PNG", vec![1]).unwrap();
        assert_eq!(upload.extension().as_deref(), Some("png"));
        let bare = ImageUpload::new("icon", vec![1]).unwrap();
        assert_eq!(bare.extension(), None);
    }

    #[test]
    fn aspect_preserving_spec_only_shrinks_wide_images() {
        let spec = ResizeSpec::FAVICON;
        assert!(spec.needs_resize(512, 512));
        assert!(!spec.needs_resize(32, 64));
        assert_eq!(spec.target_dimensions(512, 256), (32, 16));
        assert_eq!(spec.target_dimensions(16, 16), (16, 16));
    }

    #[test]
    fn exact_spec_targets_a_square() {
        let spec = ResizeSpec::POST_COVER;
        assert!(spec.needs_resize(2000, 1500));
        assert!(spec.needs_resize(400, 400));
        assert!(!spec.needs_resize(900, 900));
        assert_eq!(spec.target_dimensions(2000, 1500), (900, 900));
    }
}
