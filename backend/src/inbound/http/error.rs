//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers return it directly and have it rendered as a plain-text status
//! response.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::Error;
use crate::inbound::http::response::{render_error, status_for};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        render_error(self)
    }
}
