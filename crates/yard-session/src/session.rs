use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use yard_cache::{CacheError, CachePolicy, QueryCache, QueryKey};
use yard_catalog::{CatalogSource, fetch_all};
use yard_core::{ComparisonSet, Starship, StarshipDetails, ViewQuery, ViewResult, view};

use crate::error::SessionError;
use crate::settings::SessionSettings;

/// Comparison set shared between sessions or views that should see the same
/// selection.
pub type SharedComparison = Arc<Mutex<ComparisonSet>>;

/// Session-scoped data layer over one catalog source.
///
/// The full collection is fetched once per freshness window and shared by
/// every view; detail records are cached per uid. The comparison set is only
/// changed by the `compare_*` methods, never by background fetches.
pub struct Session<S> {
    source: Arc<S>,
    settings: SessionSettings,
    collection: QueryCache<Arc<Vec<Starship>>>,
    details: QueryCache<StarshipDetails>,
    detail_sets: QueryCache<Vec<StarshipDetails>>,
    comparison: SharedComparison,
}

impl<S> Session<S>
where
    S: CatalogSource + 'static,
{
    /// New session with an empty comparison set.
    pub fn new(source: S, settings: SessionSettings) -> Self {
        Self::with_comparison(source, settings, SharedComparison::default())
    }

    /// New session that reads and mutates an existing comparison set.
    pub fn with_comparison(
        source: S,
        settings: SessionSettings,
        comparison: SharedComparison,
    ) -> Self {
        Self {
            source: Arc::new(source),
            settings,
            collection: QueryCache::new(),
            details: QueryCache::new(),
            detail_sets: QueryCache::new(),
            comparison,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Every summary record in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Cache`] if the listing could not be fetched in
    /// full. Partial collections are never returned.
    pub async fn full_collection(&self) -> Result<Arc<Vec<Starship>>, SessionError> {
        let source = Arc::clone(&self.source);
        let page_size = self.settings.listing_page_size;

        let collection = self
            .collection
            .get(
                &QueryKey::Collection,
                self.settings.collection_policy,
                move || async move {
                    tracing::debug!(page_size, "loading full starship collection");
                    fetch_all(source.as_ref(), page_size).await.map(Arc::new)
                },
            )
            .await?;
        Ok(collection)
    }

    /// One detail record.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Cache`] if the detail fetch failed.
    pub async fn detail(&self, uid: &str) -> Result<StarshipDetails, SessionError> {
        let details = cached_detail(
            Arc::clone(&self.source),
            self.details.clone(),
            self.settings.detail_policy,
            uid.to_string(),
        )
        .await?;
        Ok(details)
    }

    /// Detail records for `uids`, in the order requested.
    ///
    /// The set is cached under an order-insensitive key and each member also
    /// goes through the per-uid cache. All-or-nothing: if any uid fails the
    /// whole call fails, while the uids that did succeed stay cached
    /// individually.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Cache`] wrapping the first failing detail.
    pub async fn details(&self, uids: &[String]) -> Result<Vec<StarshipDetails>, SessionError> {
        if uids.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids: Vec<String> = uids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let source = Arc::clone(&self.source);
        let cache = self.details.clone();
        let policy = self.settings.detail_policy;
        let producer_ids = ids.clone();

        let fetched = self
            .detail_sets
            .get(&QueryKey::multi_details(&ids), policy, move || async move {
                let fetches = producer_ids.into_iter().map(|uid| {
                    cached_detail(Arc::clone(&source), cache.clone(), policy, uid)
                });
                futures::future::try_join_all(fetches).await
            })
            .await
            .inspect_err(|error| tracing::warn!(count = ids.len(), %error, "detail batch failed"))?;

        let by_uid: HashMap<&str, &StarshipDetails> =
            ids.iter().map(String::as_str).zip(fetched.iter()).collect();
        Ok(uids
            .iter()
            .filter_map(|uid| by_uid.get(uid.as_str()).map(|details| (*details).clone()))
            .collect())
    }

    /// Slice the cached collection without touching the network.
    ///
    /// Returns `None` until the collection has been loaded (or after it has
    /// been evicted).
    #[must_use]
    pub fn query_view(&self, query: &ViewQuery) -> Option<ViewResult<Starship>> {
        self.collection
            .peek(&QueryKey::Collection)
            .map(|collection| view(collection.as_slice(), query))
    }

    /// Load the collection through the cache, then slice it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Cache`] if the collection could not be loaded.
    pub async fn load_view(&self, query: &ViewQuery) -> Result<ViewResult<Starship>, SessionError> {
        let collection = self.full_collection().await?;
        Ok(view(collection.as_slice(), query))
    }

    /// Drop evicted entries from every cache. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let removed = self.collection.purge_expired()
            + self.details.purge_expired()
            + self.detail_sets.purge_expired();
        if removed > 0 {
            tracing::debug!(removed, "purged expired cache entries");
        }
        removed
    }

    /// Add a detail record to the comparison.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Compare`] when the set is full or already holds
    /// a record with this name. The set is unchanged in that case.
    pub fn compare_add(&self, record: StarshipDetails) -> Result<(), SessionError> {
        let name = record.name.clone();
        if let Err(error) = self.comparison().add(record) {
            tracing::debug!(%name, %error, "comparison rejected record");
            return Err(error.into());
        }
        tracing::debug!(%name, "added to comparison");
        Ok(())
    }

    /// Fetch the detail record for `uid` (cache-backed) and add it to the
    /// comparison.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Cache`] if the detail fetch failed, or
    /// [`SessionError::Compare`] if the set rejected the record.
    pub async fn compare_add_uid(&self, uid: &str) -> Result<StarshipDetails, SessionError> {
        let record = self.detail(uid).await?;
        self.compare_add(record.clone())?;
        Ok(record)
    }

    pub fn compare_remove(&self, name: &str) -> Option<StarshipDetails> {
        self.comparison().remove(name)
    }

    pub fn compare_clear(&self) {
        self.comparison().clear();
    }

    #[must_use]
    pub fn compare_contains(&self, name: &str) -> bool {
        self.comparison().contains(name)
    }

    #[must_use]
    pub fn compare_can_add_more(&self) -> bool {
        self.comparison().can_add_more()
    }

    /// Copy of the current selection.
    #[must_use]
    pub fn comparison_snapshot(&self) -> ComparisonSet {
        self.comparison().clone()
    }

    /// Handle to the shared selection, for injecting into another session.
    #[must_use]
    pub fn shared_comparison(&self) -> SharedComparison {
        Arc::clone(&self.comparison)
    }

    fn comparison(&self) -> MutexGuard<'_, ComparisonSet> {
        self.comparison
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

async fn cached_detail<S>(
    source: Arc<S>,
    cache: QueryCache<StarshipDetails>,
    policy: CachePolicy,
    uid: String,
) -> Result<StarshipDetails, CacheError>
where
    S: CatalogSource + 'static,
{
    let key = QueryKey::details(uid.clone());
    cache
        .get(&key, policy, move || async move { source.fetch_detail(&uid).await })
        .await
}
