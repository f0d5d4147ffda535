//! Error types for camtools
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in camtools
#[derive(Debug, Error)]
pub enum CamError {
    /// A record is missing a key its naming rule needs
    #[error("Missing field '{field}' in record '{record}'")]
    MissingField { record: String, field: String },

    /// A field exists but holds the wrong kind of value
    #[error("Invalid field '{field}' in record '{record}': expected {expected}")]
    InvalidField {
        record: String,
        field: String,
        expected: &'static str,
    },

    /// Insert relief angle code not in the relief table
    #[error("Unknown relief angle code '{code}' in record '{record}'")]
    UnknownReliefCode { record: String, code: String },

    /// Boring bar style not in the holder style table
    #[error("Unknown holder style '{style}' in record '{record}'")]
    UnknownHolderStyle { record: String, style: String },

    /// Feed-rate pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Directory walk failed
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for camtools operations
pub type Result<T> = std::result::Result<T, CamError>;
