//! JPEG to PNG conversion endpoint.
//!
//! Decoding and resampling are CPU bound, so the pipeline runs on Actix's
//! blocking pool. The request span is carried across so pipeline logs keep
//! the request's trace identifier.

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{Span, info};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::body::read_body;
use crate::inbound::http::response::render_png;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::require_post;

/// Route serving the image conversion pipeline.
pub const JPEG_TO_PNG_PATH: &str = "/jpeg-to-png";

/// Convert an uploaded JPEG into a PNG fitted to a 256×256 box.
#[utoipa::path(
    post,
    path = "/jpeg-to-png",
    request_body(content = Vec<u8>, content_type = "image/jpeg", description = "Raw JPEG bytes"),
    responses(
        (status = 200, description = "PNG thumbnail", content_type = "image/png", body = Vec<u8>),
        (status = 400, description = "Wrong method or a body that is not a JPEG", content_type = "text/plain", body = String),
        (status = 500, description = "Internal server error", content_type = "text/plain", body = String)
    ),
    tags = ["images"],
    operation_id = "convertJpegToPng"
)]
pub async fn post_jpeg_to_png(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    info!(route = JPEG_TO_PNG_PATH, "received request");
    require_post(&req).inspect_err(|err| err.log("http"))?;
    let body = read_body(payload, state.limits.max_body_bytes)
        .await
        .inspect_err(|err| err.log("http"))?;

    let deadline = state.limits.start_deadline();
    let images = state.images.clone();
    let span = Span::current();
    let png = web::block(move || span.in_scope(|| images.process(&body, &deadline)))
        .await
        .map_err(|err| {
            let error = Error::environment(format!("blocking pool unavailable: {err}"));
            error.log("http");
            error
        })??;
    Ok(render_png(png))
}
