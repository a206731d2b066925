//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`ErrorCode`] to a status line and a `text/plain` body; the domain only
//! decides which class a failure belongs to and what the client may read.

use std::fmt;

use tracing::{error, warn};

/// Input record fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// `User_Id`, the positive user identifier.
    UserId,
    /// `Name`, the non-empty display name.
    Name,
    /// `Date_Of_Birth`, a strict `YYYY-MM-DD` calendar date.
    DateOfBirth,
    /// `Created_On`, seconds since the Unix epoch.
    CreatedOn,
}

impl RecordField {
    /// Stable camelCase identifier used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserId => "userId",
            Self::Name => "name",
            Self::DateOfBirth => "dateOfBirth",
            Self::CreatedOn => "createdOn",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable machine-readable failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Wrong HTTP method or an unreadable request body.
    RequestShape,
    /// The payload does not parse as the expected format.
    MalformedInput,
    /// A parsed value violates a domain constraint.
    InvalidField,
    /// An operation that should always succeed failed; not user-correctable.
    Environment,
}

impl ErrorCode {
    /// Stable snake-case identifier used in structured logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequestShape => "request_shape",
            Self::MalformedInput => "malformed_input",
            Self::InvalidField => "invalid_field",
            Self::Environment => "environment",
        }
    }

    /// Whether the client can correct the failure by changing its request.
    #[must_use]
    pub const fn is_client_error(self) -> bool {
        !matches!(self, Self::Environment)
    }
}

/// Classified pipeline failure.
///
/// ## Invariants
/// - `field` is `Some` exactly when `code` is [`ErrorCode::InvalidField`].
///
/// # Examples
/// ```
/// use upload_transform::domain::{Error, ErrorCode, RecordField};
///
/// let err = Error::invalid_field(RecordField::Name, "name must be set");
/// assert_eq!(err.code(), ErrorCode::InvalidField);
/// assert_eq!(err.field(), Some(RecordField::Name));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DomainError {
    code: ErrorCode,
    message: String,
    field: Option<RecordField>,
}

impl DomainError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Wrong method or unreadable body.
    #[must_use]
    pub fn request_shape(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RequestShape, message)
    }

    /// Payload failed to parse; `message` carries the decoder diagnostic.
    #[must_use]
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedInput, message)
    }

    /// A record field violates its constraint.
    #[must_use]
    pub fn invalid_field(field: RecordField, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidField,
            message: message.into(),
            field: Some(field),
        }
    }

    /// An internal collaborator failed unexpectedly.
    #[must_use]
    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Environment, message)
    }

    /// Failure class.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Full diagnostic message.
    ///
    /// For [`ErrorCode::Environment`] this may contain server-side detail and
    /// must not be forwarded to clients verbatim.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Offending record field for [`ErrorCode::InvalidField`] failures.
    #[must_use]
    pub const fn field(&self) -> Option<RecordField> {
        self.field
    }

    /// Emit the failure to the server log for `pipeline`.
    ///
    /// Client-correctable failures log at `warn`; environment failures log at
    /// `error` with the full collaborator diagnostic.
    pub fn log(&self, pipeline: &'static str) {
        let field = self.field.map(RecordField::as_str);
        if self.code.is_client_error() {
            warn!(
                pipeline,
                code = self.code.as_str(),
                field,
                detail = %self.message,
                "request rejected"
            );
        } else {
            error!(
                pipeline,
                code = self.code.as_str(),
                detail = %self.message,
                "request failed"
            );
        }
    }
}
