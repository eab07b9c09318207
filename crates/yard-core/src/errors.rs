//! Error types for the synchronous core.
//!
//! Network and cache failures live in `yard-catalog` and `yard-cache`; the
//! session crate converges them.

use thiserror::Error;

/// Rejections raised by the [`ComparisonSet`](crate::ComparisonSet).
///
/// Both variants are recoverable: the set is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompareError {
    /// The set already holds the maximum number of records.
    #[error("Maximum {max} starships can be compared")]
    Capacity { max: usize },

    /// A record with the same display name is already selected.
    #[error("Starship '{name}' is already selected for comparison")]
    Duplicate { name: String },
}
