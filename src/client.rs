//! Discogs catalog client.
//!
//! Two read-only endpoints: a single release lookup and the paginated user
//! collection listing. All calls are blocking and strictly serial; the
//! enrichment loop owns the rate-limit pause between them.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config;
use crate::error::Result;
use crate::models::{CollectionPage, Release};

/// Read-only catalog access, kept behind a trait so tests can script
/// responses without touching the network.
pub trait CatalogClient {
    /// Fetch one release by its external identifier.
    fn release(&self, id: &str) -> Result<Release>;

    /// Fetch one page of a user's collection. `url` is either the first-page
    /// URL from [`config::collection_url`] or a `pagination.urls.next` link
    /// returned by a previous page.
    fn collection_page(&self, url: &str) -> Result<CollectionPage>;
}

// ---------------------------------------------------------------------------
// DiscogsClient
// ---------------------------------------------------------------------------

/// Blocking HTTP client for the public Discogs API.
pub struct DiscogsClient {
    client: Client,
    base_url: String,
}

impl DiscogsClient {
    /// Create a client with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(config::DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(config::USER_AGENT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: config::API_BASE.to_string(),
        }
    }

    /// Point the client at a different API root (local stub servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for DiscogsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient for DiscogsClient {
    fn release(&self, id: &str) -> Result<Release> {
        let url = format!("{}/releases/{}", self.base_url, id);
        let resp = self.client.get(&url).send()?.error_for_status()?;
        Ok(resp.json()?)
    }

    fn collection_page(&self, url: &str) -> Result<CollectionPage> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.json()?)
    }
}
