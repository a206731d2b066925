//! Upload transformation service.
//!
//! Two stateless pipelines behind HTTP: `POST /json` validates and enriches
//! user records, `POST /jpeg-to-png` fits a JPEG into a 256×256 box and
//! re-encodes it as PNG.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
