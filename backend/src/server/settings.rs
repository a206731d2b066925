//! Service settings loaded via OrthoConfig.
//!
//! Values layer as defaults, configuration file, `TRANSFORM_*` environment
//! variables and command-line flags.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIME_ZONE: &str = "America/New_York";
const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;
const DEFAULT_DEADLINE_MS: u64 = 30_000;

/// Raw configuration for the transformation service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRANSFORM")]
pub struct ServiceSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// IANA zone used to render `Rfc_Created_On`.
    pub time_zone: Option<String>,
    /// Largest accepted request body in bytes.
    pub max_body_bytes: Option<usize>,
    /// Per-request processing budget in milliseconds; `0` disables it.
    pub deadline_ms: Option<u64>,
}

impl ServiceSettings {
    /// Configured bind address, falling back to all interfaces on 8080.
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Configured zone name, falling back to US Eastern time.
    #[must_use]
    pub fn time_zone(&self) -> &str {
        self.time_zone.as_deref().unwrap_or(DEFAULT_TIME_ZONE)
    }

    /// Configured body ceiling, falling back to 16 MiB.
    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }

    /// Configured processing budget in milliseconds.
    #[must_use]
    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms.unwrap_or(DEFAULT_DEADLINE_MS)
    }
}
