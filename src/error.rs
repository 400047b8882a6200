//! Unified error types for chatframe.
//!
//! A transcript parse has exactly one fatal failure: the text does not match
//! any known export format. Everything that can go wrong with an individual
//! message (an unparsable timestamp, an unattributable sender) is absorbed by
//! the pipeline and reported through [`ParseReport`](crate::core::table::ParseReport)
//! instead of through this type.
//!
//! The remaining variants cover the surrounding I/O: reading transcript files,
//! writing output, and validating user-supplied filter dates.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatframe operations.
///
/// # Example
///
/// ```rust
/// use chatframe::error::Result;
/// use chatframe::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatframeError>;

/// The error type for all chatframe operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatframeError {
    /// The transcript matched no known export format often enough to be
    /// trusted.
    ///
    /// Carries the names of every supported format so callers can surface
    /// them to the user. Retrying with the same input will fail again.
    #[error(
        "Could not detect chat export format. Supported formats: {}",
        supported.join(", ")
    )]
    UnrecognizedFormat {
        /// Names of all supported formats, in detection priority order
        supported: Vec<&'static str>,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A format descriptor's boundary pattern failed to compile.
    #[error("Invalid boundary pattern for format '{name}': {source}")]
    InvalidPattern {
        /// Descriptor name
        name: &'static str,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// The requested output format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Transcripts must be valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatframeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatframeError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatframeError {
    /// Creates an unrecognized-format error listing the supported formats.
    pub fn unrecognized_format() -> Self {
        ChatframeError::UnrecognizedFormat {
            supported: crate::parsing::descriptor::supported_format_names(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatframeError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatframeError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if the transcript format could not be detected.
    pub fn is_unrecognized_format(&self) -> bool {
        matches!(self, ChatframeError::UnrecognizedFormat { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatframeError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatframeError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatframeError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
