//! HTTP client for the starship listing and detail endpoints.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use yard_core::{Starship, StarshipDetails};

use crate::error::NetworkError;
use crate::http::{check_response, decode_json};

/// Public catalog root.
pub const DEFAULT_BASE_URL: &str = "https://www.swapi.tech/api";

const DEFAULT_USER_AGENT: &str = "shipyard/0.1";

/// One page of the starship listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub results: Vec<Starship>,
    /// The server reported a further page.
    pub has_next: bool,
    pub total_records: Option<u64>,
    pub total_pages: Option<u64>,
}

/// Source of catalog pages and detail records.
///
/// [`CatalogClient`] is the HTTP implementation; tests and embedders supply
/// their own. Implementations issue exactly one request per call and never
/// retry.
pub trait CatalogSource: Send + Sync {
    /// Fetch one 1-based page of the listing.
    fn fetch_listing_page(
        &self,
        page: u32,
        limit: u32,
    ) -> impl Future<Output = Result<ListingPage, NetworkError>> + Send;

    /// Fetch the full record for one starship.
    fn fetch_detail(
        &self,
        uid: &str,
    ) -> impl Future<Output = Result<StarshipDetails, NetworkError>> + Send;
}

#[derive(Deserialize)]
struct ListingResponse {
    #[serde(default)]
    results: Vec<Starship>,
    next: Option<String>,
    total_records: Option<u64>,
    total_pages: Option<u64>,
}

#[derive(Deserialize)]
struct DetailResponse {
    result: DetailResult,
}

#[derive(Deserialize)]
struct DetailResult {
    properties: StarshipDetails,
    uid: Option<String>,
}

impl From<ListingResponse> for ListingPage {
    fn from(resp: ListingResponse) -> Self {
        Self {
            results: resp.results,
            has_next: resp.next.is_some_and(|next| !next.is_empty()),
            total_records: resp.total_records,
            total_pages: resp.total_pages,
        }
    }
}

impl DetailResponse {
    /// Unwrap the envelope, filling `uid` from the envelope or the request
    /// when the properties omit it.
    fn into_details(self, requested_uid: &str) -> StarshipDetails {
        let DetailResult { mut properties, uid } = self.result;
        if properties.uid.is_empty() {
            properties.uid = uid.unwrap_or_else(|| requested_uid.to_string());
        }
        properties
    }
}

/// HTTP client for the remote starship catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against `base_url` with default settings and no
    /// request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(base_url: &str) -> Result<Self, NetworkError> {
        Self::with_options(base_url, DEFAULT_USER_AGENT, None)
    }

    /// Create a client with an explicit user agent and optional timeout.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn with_options(
        base_url: &str,
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, NetworkError> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn listing_url(&self, page: u32, limit: u32) -> String {
        format!("{}/starships?page={page}&limit={limit}", self.base_url)
    }

    fn detail_url(&self, uid: &str) -> String {
        format!("{}/starships/{}", self.base_url, urlencoding::encode(uid))
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_listing_page(&self, page: u32, limit: u32) -> Result<ListingPage, NetworkError> {
        let url = self.listing_url(page, limit);
        tracing::debug!(page, limit, "fetching starship listing page");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let data: ListingResponse = decode_json(resp).await?;
        Ok(data.into())
    }

    async fn fetch_detail(&self, uid: &str) -> Result<StarshipDetails, NetworkError> {
        let url = self.detail_url(uid);
        tracing::debug!(uid, "fetching starship details");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let data: DetailResponse = decode_json(resp).await?;
        Ok(data.into_details(uid))
    }
}
