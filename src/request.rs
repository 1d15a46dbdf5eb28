//! Page request construction
//!
//! A [`PageRequest`] describes one GET against the paginated endpoint: the
//! resolved URL, the page number, and the merged query parameters. Requests
//! are created per page, handed to the executor once, and never reused.

use crate::types::StringMap;
use url::Url;

/// Query parameter carrying the page number
const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size
const PER_PAGE_PARAM: &str = "per_page";

/// A single page-numbered request descriptor
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Fully resolved endpoint URL (without query parameters)
    pub url: Url,
    /// 1-based page number
    pub page: u64,
    /// Merged query parameters: caller params plus `per_page` and `page`
    pub query: StringMap,
    /// API key for basic auth
    pub api_key: String,
}

impl PageRequest {
    /// Build the request for one page.
    ///
    /// Caller-supplied parameters are merged first; the paginator's own
    /// `per_page` and `page` values win over caller entries of the same name.
    pub fn new(
        url: Url,
        page: u64,
        api_key: impl Into<String>,
        base_params: &StringMap,
        per_page: u32,
    ) -> Self {
        let mut query = base_params.clone();
        query.insert(PER_PAGE_PARAM.to_string(), per_page.to_string());
        query.insert(PAGE_PARAM.to_string(), page.to_string());

        Self {
            url,
            page,
            query,
            api_key: api_key.into(),
        }
    }
}
