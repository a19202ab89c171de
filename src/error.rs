//! Error types for autoplay control

use thiserror::Error;

/// Autoplay errors
#[derive(Debug, Error)]
pub enum AutoplayError {
    /// Configured dwell interval is zero
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,

    /// Per-slide interval attribute does not parse as milliseconds
    #[error("invalid slide interval attribute: {0:?}")]
    InvalidSlideInterval(String),
}

/// Result type for autoplay operations
pub type Result<T> = std::result::Result<T, AutoplayError>;
