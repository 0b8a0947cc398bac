//! Error types for the icon picker.
//!
//! This module defines the centralized error type [`PickerError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for icon picker operations.
///
/// Covers the catalog fetch boundary (transport, HTTP status, JSON shape), record
/// validation, selection hardening, and configuration parsing. Variants wrapping
/// external errors use `#[from]` for automatic conversion with `?`.
///
/// # Examples
///
/// ```
/// use mdi_picker::PickerError;
///
/// fn select_missing() -> Result<(), PickerError> {
///     Err(PickerError::UnknownIcon("not-a-real-id".to_string()))
/// }
///
/// assert!(select_missing().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PickerError {
    /// The HTTP request for the catalog could not be completed.
    ///
    /// Wraps connection, TLS, timeout, and body-read failures from `reqwest`.
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The catalog endpoint answered with a non-success status code.
    #[error("Catalog request to {url} failed with status {status}")]
    HttpStatus {
        /// Numeric HTTP status returned by the server.
        status: u16,
        /// URL that was requested.
        url: String,
    },

    /// The catalog document is not a JSON array of icon records.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    ///
    /// Raised by file-backed catalog sources and the trace file writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An icon record parsed but is unusable (empty id or name).
    #[error("Invalid icon record: {0}")]
    InvalidRecord(String),

    /// A selection referenced an icon id absent from the loaded catalog.
    #[error("Unknown icon: {0}")]
    UnknownIcon(String),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for icon picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;
