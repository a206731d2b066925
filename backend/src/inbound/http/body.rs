//! Request body collection with a size ceiling.
//!
//! Transport failures and oversized bodies are request-shape errors; neither
//! reaches a pipeline.

use std::pin::pin;

use actix_web::error::PayloadError;
use actix_web::web::{Bytes, BytesMut};
use futures_util::{Stream, StreamExt};

use crate::domain::Error;

/// Collect `stream` into one buffer, failing once more than `limit` bytes
/// arrive.
///
/// # Errors
/// [`crate::domain::ErrorCode::RequestShape`] when the stream yields an error
/// or exceeds `limit`.
pub async fn read_body<S>(stream: S, limit: usize) -> Result<Bytes, Error>
where
    S: Stream<Item = Result<Bytes, PayloadError>>,
{
    let mut chunks = pin!(stream);
    let mut body = BytesMut::new();
    while let Some(next) = chunks.next().await {
        let chunk = next.map_err(|err| Error::request_shape(err.to_string()))?;
        if body.len().saturating_add(chunk.len()) > limit {
            return Err(Error::request_shape(format!(
                "request body exceeds {limit} bytes"
            )));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}
