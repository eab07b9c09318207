use yard_catalog::CatalogClient;
use yard_config::YardConfig;
use yard_session::{Session, SessionSettings};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub session: Session<CatalogClient>,
}

impl AppContext {
    /// Build the catalog client and session from loaded configuration.
    pub fn init(config: &YardConfig) -> anyhow::Result<Self> {
        let client = CatalogClient::with_options(
            &config.catalog.base_url,
            &config.catalog.user_agent,
            config.catalog.timeout(),
        )?;
        tracing::debug!(base_url = client.base_url(), "catalog client ready");

        let settings = SessionSettings {
            listing_page_size: config.catalog.listing_page_size,
            view_page_size: config.general.page_size,
            collection_policy: config.cache.collection_policy(),
            detail_policy: config.cache.detail_policy(),
        };

        Ok(Self {
            session: Session::new(client, settings),
        })
    }
}
