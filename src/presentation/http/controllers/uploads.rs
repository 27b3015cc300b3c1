use crate::application::{ApplicationError, commands::ImageChange};
use crate::domain::media::ImageUpload;
use crate::presentation::http::error::{HttpError, HttpResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::Deserialize;

/// Image sent inline as base64.
#[derive(Debug, Deserialize)]
pub struct ImageUploadDto {
    pub filename: String,
    pub data: String,
}

impl ImageUploadDto {
    pub fn decode(self, max_bytes: usize) -> HttpResult<ImageUpload> {
        let bytes = STANDARD.decode(self.data.trim()).map_err(|err| {
            HttpError::from_error(ApplicationError::validation(format!(
                "image data is not valid base64: {err}"
            )))
        })?;
        if bytes.len() > max_bytes {
            return Err(HttpError::from_error(ApplicationError::validation(format!(
                "image exceeds the {max_bytes} byte upload limit"
            ))));
        }
        ImageUpload::new(self.filename, bytes).map_err(|err| HttpError::from_error(err.into()))
    }
}

/// A new upload wins over `clear`; neither keeps the current image.
pub fn image_change(
    upload: Option<ImageUploadDto>,
    clear: bool,
    max_bytes: usize,
) -> HttpResult<ImageChange> {
    match upload {
        Some(upload) => Ok(ImageChange::Replace(upload.decode(max_bytes)?)),
        None if clear => Ok(ImageChange::Clear),
        None => Ok(ImageChange::Keep),
    }
}
