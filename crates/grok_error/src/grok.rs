//! Adapter error kinds and location-tracking wrapper.

use derive_more::{Display, Error};

/// Specific error conditions raised by the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum GrokErrorKind {
    /// A caller-supplied parameter failed a local precondition.
    ///
    /// Always raised before any network call is made.
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),

    /// The remote API answered with a non-success status.
    #[display("Upstream API error (status {}): {}", status, message)]
    Upstream {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body, passed through untouched
        message: String,
    },

    /// No API key was configured.
    #[display("XAI_API_KEY environment variable not set")]
    MissingCredential,

    /// Transport-level failure (connect, timeout, TLS).
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// The response body could not be decoded.
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Local file access failed.
    #[display("I/O error: {}", _0)]
    Io(String),

    /// A request or parameter builder was missing a field.
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl GrokErrorKind {
    /// Returns true for errors raised before contacting the API.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            GrokErrorKind::InvalidArgument(_) | GrokErrorKind::Builder(_)
        )
    }
}

/// Adapter error with source location tracking.
///
/// # Examples
///
/// ```
/// use grok_error::{GrokError, GrokErrorKind};
///
/// let err = GrokError::new(GrokErrorKind::MissingCredential);
/// assert!(format!("{}", err).contains("XAI_API_KEY"));
/// ```
#[derive(Debug, Clone, Display, Error)]
#[display("Grok Error: {} at line {} in {}", kind, line, file)]
pub struct GrokError {
    /// The kind of error that occurred
    pub kind: GrokErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GrokError {
    /// Create a new GrokError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GrokErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an [`GrokErrorKind::InvalidArgument`] error.
    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(GrokErrorKind::InvalidArgument(message.into()))
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GrokErrorKind {
        &self.kind
    }
}

impl From<GrokErrorKind> for GrokError {
    #[track_caller]
    fn from(kind: GrokErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for adapter operations.
pub type GrokResult<T> = Result<T, GrokError>;
