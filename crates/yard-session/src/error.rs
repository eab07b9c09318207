use thiserror::Error;
use yard_cache::CacheError;
use yard_catalog::NetworkError;
use yard_core::CompareError;

/// Errors surfaced to presentation code.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// A cache-backed fetch failed.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The comparison set rejected an action.
    #[error(transparent)]
    Compare(#[from] CompareError),
}

impl SessionError {
    /// The underlying catalog failure, if this error came from the network.
    #[must_use]
    pub fn network_error(&self) -> Option<&NetworkError> {
        match self {
            Self::Cache(error) => error.find_source::<NetworkError>(),
            Self::Compare(_) => None,
        }
    }
}
