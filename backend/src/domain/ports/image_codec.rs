//! Driven port for raster decode, resize and encode.
//!
//! Codec and resampling internals stay in the outbound adapter; the domain
//! only computes target dimensions and classifies failures.

use image::DynamicImage;

use crate::domain::TargetDimensions;

/// Errors raised by an [`ImageCodec`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageCodecError {
    /// The input bytes are not a decodable JPEG stream.
    #[error("{message}")]
    Decode {
        /// Decoder diagnostic.
        message: String,
    },
    /// Encoding an in-memory raster failed.
    #[error("{message}")]
    Encode {
        /// Encoder diagnostic.
        message: String,
    },
}

impl ImageCodecError {
    /// Build a [`ImageCodecError::Decode`] from any diagnostic.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Build a [`ImageCodecError::Encode`] from any diagnostic.
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode {
            message: message.into(),
        }
    }
}

/// Raster capabilities consumed by the image conversion pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait ImageCodec: Send + Sync {
    /// Decode a JPEG byte stream.
    fn decode_jpeg(&self, bytes: &[u8]) -> Result<DynamicImage, ImageCodecError>;

    /// Resample `image` to exactly `target` using a Lanczos-class filter.
    fn resize(&self, image: &DynamicImage, target: TargetDimensions) -> DynamicImage;

    /// Encode `image` as PNG.
    fn encode_png(&self, image: &DynamicImage) -> Result<Vec<u8>, ImageCodecError>;
}
