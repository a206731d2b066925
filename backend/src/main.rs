//! Service entry-point: loads settings, validates them and serves the
//! transformation endpoints until a shutdown signal arrives.

mod server;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServiceSettings, create_server};
use upload_transform::outbound::ChronoTzCatalogue;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let config = ServerConfig::from_settings(&settings, &ChronoTzCatalogue)
        .map_err(std::io::Error::other)?;

    info!(
        bind_addr = %config.bind_addr(),
        time_zone = settings.time_zone(),
        "starting server"
    );
    create_server(&config)?.await
}
