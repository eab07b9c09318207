//! Environment variables layered over the default provider chain.

use figment::Jail;
use pretty_assertions::assert_eq;
use yard_config::YardConfig;

#[test]
fn env_sets_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("SHIPYARD_CATALOG__BASE_URL", "http://127.0.0.1:9000/api");
        jail.set_env("SHIPYARD_CATALOG__TIMEOUT_SECS", "30");
        jail.set_env("SHIPYARD_CACHE__DETAIL_FRESH_SECS", "120");

        let config = YardConfig::load().expect("config loads");
        assert_eq!(config.catalog.base_url, "http://127.0.0.1:9000/api");
        assert_eq!(config.catalog.timeout_secs, Some(30));
        assert_eq!(config.cache.detail_fresh_secs, 120);
        assert_eq!(config.cache.detail_evict_secs, 1800);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".shipyard")?;
        jail.create_file(
            ".shipyard/config.toml",
            r"
[catalog]
listing_page_size = 50
",
        )?;
        jail.set_env("SHIPYARD_CATALOG__LISTING_PAGE_SIZE", "10");

        let config = YardConfig::load().expect("config loads");
        assert_eq!(config.catalog.listing_page_size, 10);
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_rejected_by_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("SHIPYARD_GENERAL__PAGE_SIZE", "0");

        let err = YardConfig::load().unwrap_err();
        assert!(err.to_string().contains("general.page_size"));
        Ok(())
    });
}

#[test]
fn unrelated_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("OTHER_GENERAL__PAGE_SIZE", "99");

        let config = YardConfig::load().expect("config loads");
        assert_eq!(config.general.page_size, 10);
        Ok(())
    });
}
