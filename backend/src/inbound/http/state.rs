//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain services and remain testable with in-memory
//! collaborators.

use std::time::Duration;

use crate::domain::{Deadline, ImageConversionService, RecordEnrichmentService};

/// Per-request limits applied before and during processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLimits {
    /// Largest accepted request body in bytes.
    pub max_body_bytes: usize,
    /// Processing budget per request; `None` disables the deadline.
    pub deadline: Option<Duration>,
}

impl RequestLimits {
    /// Default body ceiling: 16 MiB.
    pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

    /// Start the processing clock for one request.
    #[must_use]
    pub fn start_deadline(&self) -> Deadline {
        Deadline::from_budget(self.deadline)
    }
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_body_bytes: Self::DEFAULT_MAX_BODY_BYTES,
            deadline: None,
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// `POST /json` pipeline.
    pub records: RecordEnrichmentService,
    /// `POST /jpeg-to-png` pipeline.
    pub images: ImageConversionService,
    /// Body ceiling and processing budget shared by both routes.
    pub limits: RequestLimits,
}

impl HttpState {
    /// Bundle both pipelines with the given request limits.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use upload_transform::domain::{ImageConversionService, RecordEnrichmentService};
    /// use upload_transform::inbound::http::state::{HttpState, RequestLimits};
    /// use upload_transform::outbound::{ChronoTzCatalogue, RasterCodec};
    ///
    /// let state = HttpState::new(
    ///     RecordEnrichmentService::new(Arc::new(ChronoTzCatalogue), "America/New_York"),
    ///     ImageConversionService::new(Arc::new(RasterCodec)),
    ///     RequestLimits::default(),
    /// );
    /// assert_eq!(state.limits.max_body_bytes, RequestLimits::DEFAULT_MAX_BODY_BYTES);
    /// ```
    #[must_use]
    pub const fn new(
        records: RecordEnrichmentService,
        images: ImageConversionService,
        limits: RequestLimits,
    ) -> Self {
        Self {
            records,
            images,
            limits,
        }
    }
}
