//! JPEG to PNG conversion pipeline.
//!
//! Decode, fit to the 256×256 bounding box, resample, encode. Every step is
//! preceded by a deadline checkpoint so a request can be abandoned between
//! steps.

use std::sync::Arc;

use image::GenericImageView;
use tracing::debug;

use crate::domain::ports::{ImageCodec, ImageCodecError};
use crate::domain::{Deadline, Error, TargetDimensions};

const PIPELINE: &str = "image_conversion";

/// Converts uploaded JPEG images into bounded PNG thumbnails.
#[derive(Clone)]
pub struct ImageConversionService {
    codec: Arc<dyn ImageCodec>,
}

impl ImageConversionService {
    /// Create a service backed by `codec`.
    #[must_use]
    pub const fn new(codec: Arc<dyn ImageCodec>) -> Self {
        Self { codec }
    }

    /// Convert `body` to PNG bytes.
    ///
    /// # Errors
    /// - [`crate::domain::ErrorCode::MalformedInput`] when `body` is not a
    ///   decodable JPEG; the message is the decoder diagnostic.
    /// - [`crate::domain::ErrorCode::Environment`] when PNG encoding fails or
    ///   `deadline` expires between steps.
    pub fn process(&self, body: &[u8], deadline: &Deadline) -> Result<Vec<u8>, Error> {
        self.convert(body, deadline)
            .inspect_err(|err| err.log(PIPELINE))
    }

    fn convert(&self, body: &[u8], deadline: &Deadline) -> Result<Vec<u8>, Error> {
        deadline.check("decode")?;
        let source = self.codec.decode_jpeg(body).map_err(classify)?;

        let (width, height) = source.dimensions();
        let target = TargetDimensions::fit(width, height);
        debug!(
            width,
            height,
            target_width = target.width,
            target_height = target.height,
            "resizing image"
        );

        deadline.check("resize")?;
        let resized = self.codec.resize(&source, target);
        drop(source);

        deadline.check("encode")?;
        self.codec.encode_png(&resized).map_err(classify)
    }
}

fn classify(error: ImageCodecError) -> Error {
    match error {
        ImageCodecError::Decode { message } => Error::malformed_input(message),
        ImageCodecError::Encode { message } => {
            Error::environment(format!("encoding PNG failed: {message}"))
        }
    }
}
