//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use upload_transform::domain::ports::ZoneCatalogue;
use upload_transform::inbound::http::state::RequestLimits;

use super::ServiceSettings;

/// Startup configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The bind address does not parse as `host:port`.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        /// Address as configured.
        value: String,
        /// Parser diagnostic.
        #[source]
        source: std::net::AddrParseError,
    },
    /// The configured zone is not in the rule database.
    #[error("invalid time zone: {0}")]
    TimeZone(#[from] upload_transform::domain::ports::ZoneLookupError),
}

/// Validated configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) time_zone: String,
    pub(crate) limits: RequestLimits,
}

impl ServerConfig {
    /// Validate `settings`, resolving the zone once through `zones`.
    ///
    /// # Errors
    /// [`ConfigError`] when the bind address does not parse or the zone is
    /// unknown.
    pub fn from_settings(
        settings: &ServiceSettings,
        zones: &dyn ZoneCatalogue,
    ) -> Result<Self, ConfigError> {
        let raw_addr = settings.bind_addr();
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::BindAddr {
                value: raw_addr.to_owned(),
                source,
            })?;
        let time_zone = settings.time_zone();
        zones.load(time_zone)?;

        let deadline = match settings.deadline_ms() {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        };
        Ok(Self {
            bind_addr,
            time_zone: time_zone.to_owned(),
            limits: RequestLimits {
                max_body_bytes: settings.max_body_bytes(),
                deadline,
            },
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
