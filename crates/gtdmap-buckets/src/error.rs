//! Error types for bucketing operations.

use thiserror::Error;

/// Errors that can occur while classifying or aggregating buckets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BucketError {
    /// The view type id is not in the registry.
    #[error("unknown view type: {0}")]
    UnknownViewType(String),
}

/// Result type alias for bucketing operations.
pub type Result<T> = std::result::Result<T, BucketError>;
