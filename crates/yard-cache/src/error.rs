//! Cache error types.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// A cached query failed.
///
/// Cloneable so one failure can be handed to every caller that was awaiting
/// the same key.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    /// The producer returned an error.
    #[error("query '{key}' failed: {source}")]
    Producer {
        key: String,
        #[source]
        source: Arc<dyn StdError + Send + Sync>,
    },

    /// The producer task ended without a result (panicked or was cancelled
    /// by runtime shutdown).
    #[error("query '{key}' was aborted before completing")]
    Aborted { key: String },
}

impl CacheError {
    pub(crate) fn producer<E>(key: &str, error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Producer {
            key: key.to_string(),
            source: Arc::new(error),
        }
    }

    /// The cache key that failed.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Producer { key, .. } | Self::Aborted { key } => key,
        }
    }

    /// Find an error of type `E` anywhere in the producer's source chain,
    /// descending into nested cache failures.
    #[must_use]
    pub fn find_source<E: StdError + 'static>(&self) -> Option<&E> {
        let Self::Producer { source, .. } = self else {
            return None;
        };
        let mut current: Option<&(dyn StdError + 'static)> = Some(source.as_ref());
        while let Some(error) = current {
            if let Some(found) = error.downcast_ref::<E>() {
                return Some(found);
            }
            if let Some(nested) = error.downcast_ref::<Self>() {
                return nested.find_source::<E>();
            }
            current = error.source();
        }
        None
    }
}
