use crate::application::{
    ApplicationError, ApplicationResult,
    ports::media::{ImageCodec, Raster, UploadValidator},
};
use crate::domain::media::{ImageUpload, ResizeSpec};
use image::{DynamicImage, ImageFormat, codecs::jpeg::JpegEncoder, imageops::FilterType};
use std::io::Cursor;

/// [`ImageCodec`] backed by the `image` crate.
#[derive(Default, Clone)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, bytes: &[u8]) -> ApplicationResult<Raster> {
        let format = image::guess_format(bytes)
            .map_err(|err| ApplicationError::resize_failure(format!("unrecognised image: {err}")))?;
        let image = image::load_from_memory_with_format(bytes, format)
            .map_err(|err| ApplicationError::resize_failure(format!("decode failed: {err}")))?;
        Ok(Raster { image, format })
    }

    fn resize(&self, raster: Raster, spec: &ResizeSpec) -> Raster {
        let Raster { image, format } = raster;
        let (width, height) = spec.target_dimensions(image.width(), image.height());
        let image = if spec.force_exact_size {
            image.resize_to_fill(width, height, FilterType::Lanczos3)
        } else {
            image.resize_exact(width, height, FilterType::Lanczos3)
        };
        Raster { image, format }
    }

    fn encode(&self, raster: &Raster, quality: Option<u8>) -> ApplicationResult<Vec<u8>> {
        let mut buffer = Vec::new();
        let result = match raster.format {
            ImageFormat::Jpeg => {
                // JPEG has no alpha channel.
                let rgb = DynamicImage::ImageRgb8(raster.image.to_rgb8());
                let quality = quality.unwrap_or(75).clamp(1, 100);
                rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, quality))
            }
            format => raster.image.write_to(&mut Cursor::new(&mut buffer), format),
        };
        result.map_err(|err| ApplicationError::resize_failure(format!("encode failed: {err}")))?;
        Ok(buffer)
    }
}

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Accepts only PNG uploads: `.png` extension and PNG signature.
#[derive(Default, Clone)]
pub struct PngUploadValidator;

impl UploadValidator for PngUploadValidator {
    fn validate(&self, upload: &ImageUpload) -> ApplicationResult<()> {
        if upload.extension().as_deref() != Some("png") {
            return Err(ApplicationError::validation(format!(
                "{} is not a .png file",
                upload.filename
            )));
        }
        if !upload.bytes.starts_with(PNG_SIGNATURE) {
            return Err(ApplicationError::validation(format!(
                "{} does not contain PNG data",
                upload.filename
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

    fn jpeg(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 40, 40]));
        let mut out = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Jpeg)
            .unwrap();
        out
    }

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([0, 0, 255, 128]));
        let mut out = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn exact_resize_produces_square_jpeg() {
        let codec = ImageCrateCodec;
        let raster = codec.decode(&jpeg(2000, 1500)).unwrap();
        assert_eq!(raster.format, ImageFormat::Jpeg);

        let resized = codec.resize(raster, &ResizeSpec::POST_COVER);
        let bytes = codec.encode(&resized, Some(75)).unwrap();
        let reloaded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(reloaded.dimensions(), (900, 900));
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn proportional_resize_keeps_aspect_ratio_and_format() {
        let codec = ImageCrateCodec;
        let raster = codec.decode(&png(512, 256)).unwrap();
        let resized = codec.resize(raster, &ResizeSpec::FAVICON);
        let bytes = codec.encode(&resized, None).unwrap();
        let reloaded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(reloaded.dimensions(), (32, 16));
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn garbage_is_a_resize_failure() {
        let err = ImageCrateCodec.decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ApplicationError::ResizeFailure(_)));
    }

    #[test]
    fn png_validator_checks_extension_and_signature() {
        let validator = PngUploadValidator;
        let ok = ImageUpload::new("favicon.png", png(4, 4)).unwrap();
        assert!(validator.validate(&ok).is_ok());

        let renamed_jpeg = ImageUpload::new("favicon.png", jpeg(4, 4)).unwrap();
        assert!(validator.validate(&renamed_jpeg).is_err());

        let wrong_extension = ImageUpload::new("favicon.ico", png(4, 4)).unwrap();
        assert!(validator.validate(&wrong_extension).is_err());
    }
}
