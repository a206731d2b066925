//! Domain ports and supporting types for the hexagonal boundary.

mod image_codec;
mod zone_catalogue;

#[cfg(test)]
pub use image_codec::MockImageCodec;
pub use image_codec::{ImageCodec, ImageCodecError};
#[cfg(test)]
pub use zone_catalogue::MockZoneCatalogue;
pub use zone_catalogue::{ZoneCatalogue, ZoneLookupError};
