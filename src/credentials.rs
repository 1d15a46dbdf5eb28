//! API credentials and base URL construction
//!
//! Credentials identify one API account: the key is sent as the basic-auth
//! username with a fixed placeholder password, and the subdomain/domain pair
//! determines the host all page requests go to.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder basic-auth password expected by the server alongside the API
/// key username.
pub const BASIC_AUTH_PASSWORD: &str = "x";

/// Credentials for a paginated API account
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// API key, sent as the basic-auth username
    pub api_key: String,
    /// Account subdomain (e.g. "acme")
    pub subdomain: String,
    /// API domain (e.g. "chargify.com")
    pub domain: String,
}

impl Credentials {
    /// Create credentials from their three parts
    pub fn new(
        api_key: impl Into<String>,
        subdomain: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            subdomain: subdomain.into(),
            domain: domain.into(),
        }
    }

    /// Build the base URL `https://{subdomain}.{domain}` for this account
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&format!("https://{}.{}", self.subdomain, self.domain))?;
        Ok(url)
    }
}

// The API key never appears in logs or debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"***")
            .field("subdomain", &self.subdomain)
            .field("domain", &self.domain)
            .finish()
    }
}
