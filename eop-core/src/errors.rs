//! Error types for Earth orientation queries.
//!
//! One unified [`EopError`] covers the failure modes of the engine: a query
//! instant that cannot be interpreted, a query outside the loaded data span,
//! an invalid interpolation configuration, and the two loader-side failures
//! (missing file, malformed line). Every failure is local to a single query;
//! nothing here is fatal to the process.
//!
//! Most functions return [`EopResult<T>`], which is `Result<T, EopError>`.
//! Use the constructor methods for consistent error creation:
//!
//! ```
//! use eop_core::EopError;
//!
//! let err = EopError::out_of_range(41683.0, 41684.0, 41693.0);
//! assert!(err.to_string().contains("41683"));
//! ```

use thiserror::Error;

/// Unified error type for Earth orientation queries.
#[derive(Error, Debug)]
pub enum EopError {
    /// No usable time representation, or a malformed one.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Query MJD outside a table's covered span (or below a model's
    /// earliest supported epoch, in which case no range is available).
    #[error("{message}")]
    OutOfRange {
        requested_mjd: f64,
        available_range: Option<(f64, f64)>,
        message: String,
    },

    /// Invalid interpolation method or order constraint violated.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A source file the loader needs does not exist.
    #[error("File not found: {path}")]
    NotFound { path: String },

    /// A source line could not be decoded.
    #[error("Failed to parse {source_name} line {line}: {message}")]
    ParseFailure {
        source_name: String,
        line: usize,
        message: String,
    },
}

/// Convenience alias for `Result<T, EopError>`.
pub type EopResult<T> = Result<T, EopError>;

impl EopError {
    /// Creates an [`InvalidInput`](Self::InvalidInput) error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: reason.into(),
        }
    }

    /// Creates an [`OutOfRange`](Self::OutOfRange) error for a query outside
    /// a table's `[first, last]` MJD span.
    pub fn out_of_range(requested_mjd: f64, first_mjd: f64, last_mjd: f64) -> Self {
        Self::OutOfRange {
            requested_mjd,
            available_range: Some((first_mjd, last_mjd)),
            message: format!(
                "Requested MJD {requested_mjd} is outside available data ({first_mjd}..{last_mjd})"
            ),
        }
    }

    /// Creates an [`OutOfRange`](Self::OutOfRange) error with no data span,
    /// for queries outside a model's coverage (for example below its
    /// earliest supported epoch, or where an optional parameter is absent).
    pub fn out_of_coverage(requested_mjd: f64, reason: impl Into<String>) -> Self {
        Self::OutOfRange {
            requested_mjd,
            available_range: None,
            message: reason.into(),
        }
    }

    /// Creates a [`Configuration`](Self::Configuration) error.
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            message: reason.into(),
        }
    }

    /// Creates a [`NotFound`](Self::NotFound) error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a [`ParseFailure`](Self::ParseFailure) error.
    pub fn parse_failure(
        source_name: impl Into<String>,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::ParseFailure {
            source_name: source_name.into(),
            line,
            message: reason.into(),
        }
    }

    /// Returns the requested MJD for range errors, if any.
    pub fn requested_mjd(&self) -> Option<f64> {
        match self {
            Self::OutOfRange { requested_mjd, .. } => Some(*requested_mjd),
            _ => None,
        }
    }

    /// Returns `true` if supplying fresh data might make the query succeed.
    ///
    /// Range errors are recoverable by widening the data window; loader
    /// errors by fixing the source files. Input and configuration errors
    /// require a corrected call.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::NotFound { .. } | Self::ParseFailure { .. }
        )
    }
}
