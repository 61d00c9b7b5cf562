//! Error types for the contact export core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur while exporting a contact card.
///
/// Every variant is caught at the export boundary and translated into a
/// single user-visible notification; none of them is allowed to take the
/// rest of the page down.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Document generation failed (defensive only; generation is pure string
    /// construction and should not fail for a structurally valid record)
    #[error("document generation failed: {0}")]
    Generation(String),

    /// The runtime refused the delivery channel (popup suppressed, download
    /// blocked, or no channel available at all)
    #[error("delivery blocked by the runtime: {0}")]
    DeliveryBlocked(String),

    /// Neither the async clipboard nor the legacy selection-copy worked
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

/// Errors that can occur while loading the card configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration field has an invalid value
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    /// The configuration document is not valid JSON
    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ExportError
pub type ExportResult<T> = Result<T, ExportError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
