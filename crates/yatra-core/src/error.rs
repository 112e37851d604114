// crates/yatra-core/src/error.rs
use thiserror::Error;

/// Errors produced by the yatra data core.
///
/// Fuzzy-match outcomes (no query, no candidates, below threshold) are not
/// errors; see [`crate::fuzzy::MatchOutcome`].
#[derive(Debug, Error)]
pub enum TourError {
    /// A malformed call, e.g. asking for city candidates without a state.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Nothing matched a fully specified lookup.
    #[error("not found: {0}")]
    NotFound(String),

    /// A backing table could not be loaded. No feature works without it.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Input that parsed but cannot be used (e.g. a row that is not an object).
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dataset cache error: {0}")]
    Bincode(#[from] bincode::Error),

    /// The nearby-places service answered with a non-success status.
    #[error("nearby lookup returned HTTP status {0}")]
    LookupStatus(u16),

    /// The nearby-places service could not be reached or timed out.
    #[error("nearby lookup failed: {0}")]
    LookupFailed(String),
}

pub type Result<T> = std::result::Result<T, TourError>;
