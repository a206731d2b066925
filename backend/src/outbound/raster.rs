//! `image` crate adapter for the [`ImageCodec`] port.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::domain::TargetDimensions;
use crate::domain::ports::{ImageCodec, ImageCodecError};

/// JPEG start-of-image marker.
const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];

/// Diagnostic for payloads lacking the JPEG start-of-image marker.
pub const MISSING_SOI_MESSAGE: &str = "invalid JPEG format: missing SOI marker";

/// Pure-Rust raster codec: JPEG in, Lanczos3 resampling, PNG out.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterCodec;

impl ImageCodec for RasterCodec {
    fn decode_jpeg(&self, bytes: &[u8]) -> Result<DynamicImage, ImageCodecError> {
        if !bytes.starts_with(&JPEG_SOI) {
            return Err(ImageCodecError::decode(MISSING_SOI_MESSAGE));
        }
        image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)
            .map_err(|err| ImageCodecError::decode(format!("invalid JPEG format: {err}")))
    }

    fn resize(&self, image: &DynamicImage, target: TargetDimensions) -> DynamicImage {
        image.resize_exact(target.width, target.height, FilterType::Lanczos3)
    }

    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>, ImageCodecError> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|err| ImageCodecError::encode(err.to_string()))?;
        Ok(buffer.into_inner())
    }
}
