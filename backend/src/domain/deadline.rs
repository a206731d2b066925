//! Cooperative processing deadline checked between pipeline steps.
//!
//! Pipelines call [`Deadline::check`] before each expensive step so a request
//! that outlives the server-imposed budget stops at the next step boundary
//! instead of running decode, resize and encode to completion.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::domain::Error;

/// Instant after which a pipeline must stop at its next checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    /// A deadline that never expires.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { expires_at: None }
    }

    /// A deadline `budget` from now. `None` yields [`Deadline::unbounded`].
    #[must_use]
    pub fn from_budget(budget: Option<Duration>) -> Self {
        Self {
            expires_at: budget.and_then(|limit| Instant::now().checked_add(limit)),
        }
    }

    /// Whether the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }

    /// Fail with an environment error when the deadline has passed.
    ///
    /// `step` names the step that would run next, for the server log.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::Environment`] once expired.
    pub fn check(&self, step: &'static str) -> Result<(), Error> {
        if self.is_expired() {
            warn!(step, "processing deadline exceeded");
            return Err(Error::environment(format!(
                "processing deadline exceeded before {step}"
            )));
        }
        Ok(())
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::unbounded()
    }
}
