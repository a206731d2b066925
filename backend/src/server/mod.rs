//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServiceSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use upload_transform::Trace;
#[cfg(debug_assertions)]
use upload_transform::doc::ApiDoc;
use upload_transform::domain::{ImageConversionService, RecordEnrichmentService};
use upload_transform::inbound::http::configure;
use upload_transform::inbound::http::state::HttpState;
use upload_transform::outbound::{ChronoTzCatalogue, RasterCodec};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let records = RecordEnrichmentService::new(
        Arc::new(ChronoTzCatalogue),
        config.time_zone.clone(),
    );
    let images = ImageConversionService::new(Arc::new(RasterCodec));
    web::Data::new(HttpState::new(records, images, config.limits))
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let mut app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    {
        app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    app
}

/// Construct an Actix HTTP server from a validated configuration.
///
/// The returned server stops gracefully on `SIGINT` or `SIGTERM`, letting
/// in-flight requests finish.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: &ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(config);
    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(config.bind_addr)?
        .run();
    Ok(server)
}
