//! Errors raised while loading OCR output.
//!
//! The analysis itself never fails; only reading and decoding the OCR
//! response, or asking for an inspection kind that has no parser, can.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for the `panelscan` crate.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The OCR response file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OCR response is not valid JSON or does not have the expected shape.
    #[error("invalid OCR response: {0}")]
    Json(#[from] serde_json::Error),

    /// No parser exists for the requested inspection kind.
    #[error("unsupported inspection kind: {0}")]
    UnsupportedKind(String),
}

/// Result type alias for `panelscan` operations.
pub type Result<T> = std::result::Result<T, ScanError>;
