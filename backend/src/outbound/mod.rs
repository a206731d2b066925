//! Outbound adapters implementing domain ports for external capabilities.
//!
//! - **time_zone**: IANA rule lookup backed by `chrono-tz`
//! - **raster**: JPEG decode, Lanczos3 resize and PNG encode backed by `image`
//!
//! Adapters are thin translators between library types and domain port
//! errors. They contain no business logic.

pub mod raster;
pub mod time_zone;

pub use raster::RasterCodec;
pub use time_zone::ChronoTzCatalogue;
