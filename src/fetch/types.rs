//! Fetch configuration and result types

use crate::classify::PageFailure;
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::types::{identity_extractor, Extractor, JsonValue, StringMap};
use url::Url;

/// Default number of items requested per page
pub const DEFAULT_PER_PAGE: u32 = 200;

/// Default number of pages fetched per concurrent batch
pub const DEFAULT_BATCH_SIZE: u32 = 20;

/// Configuration for one fetch call
///
/// Built once with the `with_*` methods and treated as immutable for the
/// duration of the call.
#[derive(Clone)]
pub struct FetchConfig {
    /// Endpoint path, joined onto the base URL (e.g. "/subscriptions.json")
    pub endpoint: String,
    /// Account credentials; also determine the base URL unless overridden
    pub credentials: Credentials,
    /// Items requested per page
    pub per_page: u32,
    /// Pages fetched per concurrent batch
    pub batch_size: u32,
    /// Extra query parameters sent with every page request
    pub params: StringMap,
    /// Maps a response body to its item list
    pub extractor: Extractor,
    /// Base URL override for alternate deployments; defaults to the
    /// credentials-derived `https://{subdomain}.{domain}`
    pub base_url: Option<Url>,
}

impl FetchConfig {
    /// Create a config with default page size, batch size, and extractor
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials,
            per_page: DEFAULT_PER_PAGE,
            batch_size: DEFAULT_BATCH_SIZE,
            params: StringMap::new(),
            extractor: identity_extractor(),
            base_url: None,
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the batch size (also the request concurrency cap)
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Add one query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Merge in query parameters
    #[must_use]
    pub fn with_params(mut self, params: StringMap) -> Self {
        self.params.extend(params);
        self
    }

    /// Set the item extractor
    #[must_use]
    pub fn with_extractor<F>(mut self, extractor: F) -> Self
    where
        F: Fn(&JsonValue) -> anyhow::Result<Vec<JsonValue>> + Send + Sync + 'static,
    {
        self.extractor = std::sync::Arc::new(extractor);
        self
    }

    /// Override the base URL (testing, alternate deployments)
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Validate the config; must pass before any network I/O
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(Error::invalid_value(
                "per_page",
                "must be greater than zero",
            ));
        }
        if self.batch_size == 0 {
            return Err(Error::invalid_value(
                "batch_size",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Resolve the full page URL: base URL (override or credentials-derived)
    /// joined with the endpoint path
    pub(crate) fn page_url(&self) -> Result<Url> {
        let base = match &self.base_url {
            Some(url) => url.clone(),
            None => self.credentials.base_url()?,
        };
        let url = base.join(&self.endpoint)?;
        Ok(url)
    }
}

impl std::fmt::Debug for FetchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchConfig")
            .field("endpoint", &self.endpoint)
            .field("credentials", &self.credentials)
            .field("per_page", &self.per_page)
            .field("batch_size", &self.batch_size)
            .field("params", &self.params)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// A page that failed and contributed no items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedPage {
    /// 1-based page number
    pub page: u64,
    /// Why it failed
    pub failure: PageFailure,
}

/// Full result of a fetch call
///
/// `items` holds every successfully fetched page's items in batch order
/// (completion order within each batch). `failed_pages` distinguishes a
/// complete result from one that silently lost pages.
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// All extracted items
    pub items: Vec<JsonValue>,
    /// Number of pages that returned items
    pub pages_fetched: u64,
    /// Number of batches issued
    pub batches: u64,
    /// Pages that failed, with their classification
    pub failed_pages: Vec<FailedPage>,
}

impl FetchReport {
    /// Whether every requested page contributed its items
    pub fn is_complete(&self) -> bool {
        self.failed_pages.is_empty()
    }
}
