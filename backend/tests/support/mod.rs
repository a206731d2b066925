//! Shared helper utilities for integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`; this
//! module gives them one home for fixtures and service wiring.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono_tz::Tz;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use upload_transform::Trace;
use upload_transform::domain::ports::{ZoneCatalogue, ZoneLookupError};
use upload_transform::domain::{ImageConversionService, RecordEnrichmentService};
use upload_transform::inbound::http::configure;
use upload_transform::inbound::http::state::{HttpState, RequestLimits};
use upload_transform::outbound::{ChronoTzCatalogue, RasterCodec};

const EASTERN: &str = "America/New_York";

/// Body ceiling applied by [`app`]; small enough to exceed in tests.
pub const TEST_MAX_BODY_BYTES: usize = 64 * 1024;

/// Zone catalogue whose rule database is unavailable.
pub struct MissingZones;

impl ZoneCatalogue for MissingZones {
    fn load(&self, name: &str) -> Result<Tz, ZoneLookupError> {
        Err(ZoneLookupError::UnknownZone {
            name: name.to_owned(),
            reason: "rule database unavailable".to_owned(),
        })
    }
}

fn low_byte(value: u32) -> u8 {
    u8::try_from(value & 0xFF).unwrap_or(u8::MAX)
}

/// Encode a `width`×`height` gradient as a baseline JPEG.
pub fn jpeg_fixture(width: u32, height: u32) -> Vec<u8> {
    let pixels = RgbImage::from_fn(width, height, |x, y| {
        Rgb([low_byte(x), low_byte(y), low_byte(x.wrapping_add(y))])
    });
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(pixels)
        .write_to(&mut bytes, ImageFormat::Jpeg)
        .expect("encode JPEG fixture");
    bytes.into_inner()
}

/// State wired to the real adapters, or to `zones` when given.
pub fn http_state(zones: Option<Arc<dyn ZoneCatalogue>>) -> HttpState {
    let catalogue = zones.unwrap_or_else(|| Arc::new(ChronoTzCatalogue));
    HttpState::new(
        RecordEnrichmentService::new(catalogue, EASTERN),
        ImageConversionService::new(Arc::new(RasterCodec)),
        RequestLimits {
            max_body_bytes: TEST_MAX_BODY_BYTES,
            deadline: Some(Duration::from_secs(30)),
        },
    )
}

/// Application exposing both routes behind the trace middleware.
pub fn app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}
