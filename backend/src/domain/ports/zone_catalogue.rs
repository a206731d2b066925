//! Driven port for time-zone rule lookup.
//!
//! The record pipeline resolves the configured zone through this port so a
//! missing or corrupt rule database surfaces as a classified environment
//! failure instead of a panic.

use chrono_tz::Tz;

/// Errors raised while resolving a zone identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneLookupError {
    /// The rule database has no entry for the identifier.
    #[error("unknown time zone {name}: {reason}")]
    UnknownZone {
        /// Identifier that failed to resolve.
        name: String,
        /// Diagnostic from the rule database.
        reason: String,
    },
}

/// Read-only time-zone rule lookup.
#[cfg_attr(test, mockall::automock)]
pub trait ZoneCatalogue: Send + Sync {
    /// Resolve an IANA identifier such as `America/New_York`.
    fn load(&self, name: &str) -> Result<Tz, ZoneLookupError>;
}
