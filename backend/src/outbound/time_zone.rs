//! `chrono-tz` adapter for the [`ZoneCatalogue`] port.
//!
//! The rule database is compiled into the binary, so lookups never touch the
//! filesystem and are safe to repeat per record.

use chrono_tz::Tz;

use crate::domain::ports::{ZoneCatalogue, ZoneLookupError};

/// Zone lookup over the compiled-in IANA database.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChronoTzCatalogue;

impl ZoneCatalogue for ChronoTzCatalogue {
    fn load(&self, name: &str) -> Result<Tz, ZoneLookupError> {
        name.parse::<Tz>()
            .map_err(|err| ZoneLookupError::UnknownZone {
                name: name.to_owned(),
                reason: err.to_string(),
            })
    }
}
