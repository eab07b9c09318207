//! Full-collection fetcher.
//!
//! The only place that walks the listing server-side. Everything downstream
//! treats the collection as already materialized.

use yard_core::Starship;

use crate::client::CatalogSource;
use crate::error::NetworkError;

/// Large page size used to drain the listing in few requests.
pub const DEFAULT_LISTING_PAGE_SIZE: u32 = 100;

/// Upper bound on pages walked before the listing is considered broken.
pub const MAX_LISTING_PAGES: u32 = 1000;

/// Fetch every summary record, page by page, until the server stops
/// reporting a next page.
///
/// The operation is atomic from the caller's view: if any page fails the
/// partial accumulator is dropped and the error is returned.
///
/// # Errors
///
/// Returns the first [`NetworkError`] from any page, or
/// [`NetworkError::Pagination`] if the listing never terminates.
pub async fn fetch_all<S>(source: &S, page_size: u32) -> Result<Vec<Starship>, NetworkError>
where
    S: CatalogSource,
{
    let page_size = page_size.max(1);
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let listing = source.fetch_listing_page(page, page_size).await.map_err(|error| {
            tracing::warn!(page, %error, "listing page failed; discarding partial collection");
            error
        })?;
        all.extend(listing.results);

        if !listing.has_next {
            break;
        }
        if page >= MAX_LISTING_PAGES {
            return Err(NetworkError::Pagination { pages: page });
        }
        page += 1;
    }

    tracing::debug!(pages = page, records = all.len(), "fetched full starship collection");
    Ok(all)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    use pretty_assertions::assert_eq;
    use yard_core::StarshipDetails;

    use super::*;
    use crate::client::ListingPage;

    /// Replays a fixed sequence of listing responses and records the
    /// requested pages.
    struct ScriptedListing {
        pages: Mutex<VecDeque<Result<ListingPage, NetworkError>>>,
        requested: Mutex<Vec<(u32, u32)>>,
    }

    impl ScriptedListing {
        fn new(pages: Vec<Result<ListingPage, NetworkError>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<(u32, u32)> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl CatalogSource for ScriptedListing {
        async fn fetch_listing_page(&self, page: u32, limit: u32) -> Result<ListingPage, NetworkError> {
            self.requested.lock().unwrap().push((page, limit));
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(NetworkError::Parse("script exhausted".to_string())))
        }

        async fn fetch_detail(&self, uid: &str) -> Result<StarshipDetails, NetworkError> {
            Err(NetworkError::Api {
                status: 404,
                message: format!("no detail for {uid}"),
            })
        }
    }

    fn page(uids: &[&str], has_next: bool) -> Result<ListingPage, NetworkError> {
        page_of(uids, has_next)
    }

    fn page_of(uids: &[&str], has_next: bool) -> Result<ListingPage, NetworkError> {
        Ok(ListingPage {
            results: uids
                .iter()
                .map(|uid| Starship {
                    uid: (*uid).to_string(),
                    name: format!("Ship {uid}"),
                    url: format!("https://www.swapi.tech/api/starships/{uid}"),
                })
                .collect(),
            has_next,
            total_records: None,
            total_pages: None,
        })
    }

    #[tokio::test]
    async fn walks_pages_until_next_is_absent() {
        let source = ScriptedListing::new(vec![
            page(&["2", "3"], true),
            page(&["5", "9"], true),
            page(&["10"], false),
        ]);

        let all = fetch_all(&source, 2).await.unwrap();
        let uids: Vec<&str> = all.iter().map(|s| s.uid.as_str()).collect();

        assert_eq!(uids, vec!["2", "3", "5", "9", "10"]);
        assert_eq!(source.requested(), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[tokio::test]
    async fn single_page_collection() {
        let source = ScriptedListing::new(vec![page(&["2"], false)]);
        let all = fetch_all(&source, DEFAULT_LISTING_PAGE_SIZE).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(source.requested(), vec![(1, 100)]);
    }

    #[tokio::test]
    async fn failing_page_discards_everything() {
        let source = ScriptedListing::new(vec![
            page(&["2", "3"], true),
            Err(NetworkError::Api {
                status: 503,
                message: "unavailable".to_string(),
            }),
            page(&["10"], false),
        ]);

        let err = fetch_all(&source, 2).await.unwrap_err();
        assert!(matches!(err, NetworkError::Api { status: 503, .. }));
        assert_eq!(source.requested().len(), 2);
    }

    /// Listing that always claims another page follows.
    struct EndlessListing {
        requests: AtomicU32,
    }

    impl CatalogSource for EndlessListing {
        async fn fetch_listing_page(&self, page: u32, _limit: u32) -> Result<ListingPage, NetworkError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            let uid = page.to_string();
            page_of(&[uid.as_str()], true)
        }

        async fn fetch_detail(&self, uid: &str) -> Result<StarshipDetails, NetworkError> {
            Err(NetworkError::Api {
                status: 404,
                message: format!("no detail for {uid}"),
            })
        }
    }

    #[tokio::test]
    async fn endless_listing_stops_at_page_limit() {
        let source = EndlessListing {
            requests: AtomicU32::new(0),
        };

        let err = fetch_all(&source, 10).await.unwrap_err();

        assert!(matches!(
            err,
            NetworkError::Pagination {
                pages: MAX_LISTING_PAGES
            }
        ));
        assert_eq!(MAX_LISTING_PAGES, 1000);
        assert_eq!(source.requests.load(Ordering::SeqCst), 1000);
    }

    #[tokio::test]
    async fn zero_page_size_is_clamped() {
        let source = ScriptedListing::new(vec![page(&[], false)]);
        let all = fetch_all(&source, 0).await.unwrap();
        assert!(all.is_empty());
        assert_eq!(source.requested(), vec![(1, 1)]);
    }
}
