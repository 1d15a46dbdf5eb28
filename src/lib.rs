//! # pagehaul
//!
//! Concurrent batch fetcher for page-numbered HTTP APIs.
//!
//! Fetches every page of a paginated endpoint by issuing page requests in
//! fixed-size concurrent batches, extracting a logical item list from each
//! response, and concatenating all pages into one result.
//!
//! ## Features
//!
//! - **Batched concurrency**: `batch_size` pages in flight at once, batches
//!   strictly sequential
//! - **Pluggable extraction**: a caller closure maps each response body to
//!   its items
//! - **Failure classification**: timeouts, dead connections, and HTTP errors
//!   are classified per page and never abort the fetch
//! - **Partial-result accounting**: [`fetch_report`] tells a complete result
//!   from one with dropped pages
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagehaul::{fetch, Credentials, FetchConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let credentials = Credentials::new("api-key", "acme", "chargify.com");
//!     let config = FetchConfig::new("/subscriptions.json", credentials)
//!         .with_per_page(200)
//!         .with_batch_size(20)
//!         .with_extractor(|body| {
//!             body["subscriptions"]
//!                 .as_array()
//!                 .cloned()
//!                 .ok_or_else(|| anyhow::anyhow!("missing subscriptions key"))
//!         });
//!
//!     let subscriptions = fetch(&config).await?;
//!     println!("{} subscriptions", subscriptions.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        Fetcher                            │
//! │  batch loop · stop decision · accumulator · report        │
//! └──────────────┬───────────────────────────┬────────────────┘
//!                │                           │
//! ┌──────────────┴──────────────┐ ┌──────────┴────────────────┐
//! │       BatchExecutor         │ │        classify           │
//! │  N page GETs in parallel,   │ │  RawResponse → items or   │
//! │  completion-ordered results │ │  TimedOut / NoResponse /  │
//! │  (HttpExecutor on reqwest)  │ │  HttpStatus               │
//! └─────────────────────────────┘ └───────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// API credentials and base URL construction
pub mod credentials;

/// Page request construction
pub mod request;

/// Response classification
pub mod classify;

/// Concurrent HTTP batch executor
pub mod executor;

/// Paginated batch fetcher
pub mod fetch;

// ============================================================================
// Re-exports
// ============================================================================

pub use classify::{PageFailure, PageOutcome};
pub use credentials::Credentials;
pub use error::{Error, Result};
pub use executor::{BatchExecutor, ExecutorConfig, HttpExecutor, RawResponse};
pub use fetch::{fetch, fetch_report, FailedPage, FetchConfig, FetchReport, Fetcher};
pub use request::PageRequest;
pub use types::{identity_extractor, Extractor, JsonValue, StringMap};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
