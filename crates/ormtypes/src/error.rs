//! Error types for column value conversion.

use thiserror::Error;

/// Conversion errors surfaced to the persistence or JSON layer.
#[derive(Debug, Error)]
pub enum Error {
    /// The stored text is not a JSON array of the expected element type.
    #[error("malformed JSON array encoding: {0}")]
    MalformedEncoding(#[source] serde_json::Error),

    /// The driver handed over a value kind the target type cannot read.
    #[error("unsupported source type for scan: {kind}")]
    UnsupportedSourceType { kind: &'static str },

    /// JSON marshalling failed.
    #[error("failed to encode value as JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
