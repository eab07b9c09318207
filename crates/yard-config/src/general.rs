//! General presentation configuration.

use serde::{Deserialize, Serialize};
use yard_core::view::DEFAULT_PAGE_SIZE;

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Records per page in list views.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(GeneralConfig::default().page_size, 10);
    }
}
