//! Response rendering for the transformation endpoints.
//!
//! Success bodies are written verbatim with their content type. Failure bodies
//! are `text/plain`: a status preamble line followed by the client-facing
//! message.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;

use crate::domain::{Error, ErrorCode};

/// Client message substituted for every environment failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Status code carried by each failure class.
#[must_use]
pub const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::RequestShape | ErrorCode::MalformedInput | ErrorCode::InvalidField => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::Environment => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// First line of an error body, e.g. `"400 Bad Request\n"`.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use upload_transform::inbound::http::response::status_preamble;
///
/// assert_eq!(status_preamble(StatusCode::BAD_REQUEST), "400 Bad Request\n");
/// ```
#[must_use]
pub fn status_preamble(status: StatusCode) -> String {
    let code = status.as_u16();
    status.canonical_reason().map_or_else(
        || format!("{code}\n"),
        |reason| format!("{code} {reason}\n"),
    )
}

/// Message a client may read for `error`.
const fn client_message(error: &Error) -> &str {
    if error.code().is_client_error() {
        error.message()
    } else {
        INTERNAL_ERROR_MESSAGE
    }
}

/// Render `error` as a `text/plain` response.
#[must_use]
pub fn render_error(error: &Error) -> HttpResponse {
    let status = status_for(error.code());
    let mut body = status_preamble(status);
    body.push_str(client_message(error));
    HttpResponse::build(status)
        .content_type(ContentType::plaintext())
        .body(body)
}

/// Render a serialised `UserInfo` array.
#[must_use]
pub fn render_json(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body)
}

/// Render encoded PNG bytes.
#[must_use]
pub fn render_png(body: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::png())
        .body(body)
}
