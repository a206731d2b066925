//! Domain pipelines, primitives and ports.
//!
//! Purpose: hold the request-processing logic for both endpoints free of any
//! HTTP concerns. Pipelines are stateless between requests; their only
//! collaborators are the read-only ports in [`ports`].
//!
//! Public surface:
//! - [`RecordEnrichmentService`]: JSON user records to enriched user info.
//! - [`ImageConversionService`]: JPEG to bounded PNG.
//! - [`Error`] / [`ErrorCode`] / [`RecordField`]: classified failures.
//! - [`Deadline`]: cooperative cancellation between pipeline steps.

pub mod deadline;
pub mod error;
pub mod image_conversion;
pub mod ports;
pub mod record_enrichment;
pub mod record_validation;
pub mod target_dimensions;
pub mod user_record;

pub use self::deadline::Deadline;
pub use self::error::{DomainError as Error, ErrorCode, RecordField};
pub use self::image_conversion::ImageConversionService;
pub use self::record_enrichment::RecordEnrichmentService;
pub use self::target_dimensions::{BOUNDING_BOX, TargetDimensions};
pub use self::user_record::{UserInfo, UserRecord};
