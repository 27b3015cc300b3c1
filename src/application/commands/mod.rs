pub mod blog;
pub mod site_setup;

use crate::domain::media::ImageUpload;

/// What a save does to an image field.
#[derive(Debug, Clone, Default)]
pub enum ImageChange {
    #[default]
    Keep,
    Replace(ImageUpload),
    Clear,
}
