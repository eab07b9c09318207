use serde::{Deserialize, Serialize};

use super::CatalogRecord;

/// Lightweight listing-endpoint representation of a starship.
///
/// Identity is `uid`. Summaries are immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Starship {
    pub uid: String,
    pub name: String,
    pub url: String,
}

impl CatalogRecord for Starship {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn name(&self) -> &str {
        &self.name
    }
}
