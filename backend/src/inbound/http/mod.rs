//! HTTP inbound adapter exposing the transformation endpoints.
//!
//! Both routes are registered for every method so a non-`POST` request is
//! answered with the pipeline's own 400 rather than Actix's 405.

pub mod body;
pub mod error;
pub mod images;
pub mod records;
pub mod response;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;
pub use images::{JPEG_TO_PNG_PATH, post_jpeg_to_png};
pub use records::{JSON_PATH, post_json};

/// Register both transformation routes.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use upload_transform::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(JSON_PATH).to(post_json))
        .service(web::resource(JPEG_TO_PNG_PATH).to(post_jpeg_to_png));
}
