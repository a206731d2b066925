//! Request-shape checks shared by the inbound HTTP handlers.

use actix_web::HttpRequest;
use actix_web::http::Method;

use crate::domain::Error;

/// Both endpoints accept only `POST`.
///
/// # Errors
/// [`crate::domain::ErrorCode::RequestShape`] naming the received method.
pub fn require_post(req: &HttpRequest) -> Result<(), Error> {
    if req.method() == Method::POST {
        return Ok(());
    }
    Err(Error::request_shape(format!(
        "Expected POST request method, instead received {}",
        req.method()
    )))
}
