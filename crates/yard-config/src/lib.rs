//! # yard-config
//!
//! Layered configuration loading for Shipyard using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SHIPYARD_*` prefix, `__` as separator)
//! 2. Project-level `.shipyard/config.toml`
//! 3. User-level `~/.config/shipyard/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SHIPYARD_CATALOG__BASE_URL` -> `catalog.base_url`,
//! `SHIPYARD_CACHE__DETAIL_FRESH_SECS` -> `cache.detail_fresh_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use yard_config::YardConfig;
//!
//! let config = YardConfig::load_with_dotenv().expect("config");
//! println!("catalog at {}", config.catalog.base_url);
//! ```

mod cache;
mod catalog;
mod error;
mod general;

pub use cache::CacheConfig;
pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SHIPYARD_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct YardConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl YardConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse, or
    /// [`ConfigError::InvalidValue`] if the merged values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".shipyard/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values the data layer cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::invalid("catalog.base_url", "must not be empty"));
        }
        if self.catalog.listing_page_size == 0 {
            return Err(ConfigError::invalid(
                "catalog.listing_page_size",
                "must be at least 1",
            ));
        }
        if self.general.page_size == 0 {
            return Err(ConfigError::invalid("general.page_size", "must be at least 1"));
        }
        if self.catalog.timeout_secs == Some(0) {
            return Err(ConfigError::invalid(
                "catalog.timeout_secs",
                "must be at least 1 when set",
            ));
        }
        check_window(
            "cache.collection_fresh_secs",
            self.cache.collection_fresh_secs,
            self.cache.collection_evict_secs,
        )?;
        check_window(
            "cache.detail_fresh_secs",
            self.cache.detail_fresh_secs,
            self.cache.detail_evict_secs,
        )
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("shipyard").join("config.toml"))
    }

    /// Load `.env` from the workspace root, walking up from
    /// `CARGO_MANIFEST_DIR` when set. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

fn check_window(field: &str, fresh_secs: u64, evict_secs: u64) -> Result<(), ConfigError> {
    if fresh_secs > evict_secs {
        return Err(ConfigError::invalid(
            field,
            format!("freshness ({fresh_secs}s) exceeds eviction ({evict_secs}s)"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = YardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.page_size, 10);
        assert_eq!(config.catalog.listing_page_size, 100);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: YardConfig = YardConfig::figment().extract()?;
            assert_eq!(config.catalog.base_url, "https://www.swapi.tech/api");
            assert_eq!(config.cache.detail_fresh_secs, 600);
            Ok(())
        });
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let mut config = YardConfig::default();
        config.general.page_size = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.page_size"));
    }

    #[test]
    fn fresh_longer_than_evict_is_rejected() {
        let mut config = YardConfig::default();
        config.cache.detail_fresh_secs = 3600;
        config.cache.detail_evict_secs = 60;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("cache.detail_fresh_secs"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = YardConfig::default();
        config.catalog.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }
}
