//! Error types shared across the core

use thiserror::Error;

/// Top-level error for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied an empty or otherwise unusable request field
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The external content generator failed or produced unusable output
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Failure modes of the external content generator
///
/// All variants map to the same outcome at the request boundary: the call is
/// not retried and the underlying cause is logged rather than shown to the
/// caller.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Request(String),

    #[error("generation API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("generation response contained no candidate text")]
    EmptyResponse,

    #[error("generated output is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("generated output does not match the requested schema: {0}")]
    SchemaViolation(String),
}
