//! Paginated batch fetcher
//!
//! # Overview
//!
//! Drives the pagination loop: build a batch of page-numbered requests, run
//! them concurrently through the executor, classify every completion, append
//! extracted items to the accumulator, and decide after each batch whether
//! pagination is exhausted.
//!
//! Batches are strictly sequential (batch *k+1* is never issued before
//! batch *k* fully completes) while requests within a batch run in
//! parallel. All aggregation happens on the driving task from the
//! executor's completion-ordered results, so no shared mutable state is
//! touched concurrently.

mod types;

pub use types::{FailedPage, FetchConfig, FetchReport, DEFAULT_BATCH_SIZE, DEFAULT_PER_PAGE};

use crate::classify::{classify, PageOutcome};
use crate::error::Result;
use crate::executor::{BatchExecutor, HttpExecutor};
use crate::request::PageRequest;
use crate::types::JsonValue;
use tracing::debug;

/// Fetches every page of a paginated endpoint through a batch executor
pub struct Fetcher<E> {
    executor: E,
}

impl<E: BatchExecutor> Fetcher<E> {
    /// Create a fetcher around the given executor
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// Get the underlying executor
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Fetch all pages and return the concatenated item list.
    ///
    /// Pages that fail at the transport or HTTP level are logged and skipped;
    /// the result is silently missing their items. Use [`fetch_report`] on
    /// this type to tell a complete result from a degraded one.
    ///
    /// [`fetch_report`]: Fetcher::fetch_report
    pub async fn fetch(&self, config: &FetchConfig) -> Result<Vec<JsonValue>> {
        Ok(self.fetch_report(config).await?.items)
    }

    /// Fetch all pages, returning items plus per-page failure accounting.
    ///
    /// Pagination is exhausted when any page in a batch yields fewer items
    /// than `per_page` (an empty page counts). The stop decision is a
    /// reduction over the whole batch, so a short page anywhere in the batch
    /// ends the fetch after that batch completes; this assumes the server
    /// never returns a short page followed by more data. Failed pages never
    /// trigger the stop condition, so pagination continues past a transient
    /// failure.
    pub async fn fetch_report(&self, config: &FetchConfig) -> Result<FetchReport> {
        config.validate()?;
        let url = config.page_url()?;

        let mut report = FetchReport::default();
        let mut current_page: u64 = 1;

        loop {
            let batch: Vec<PageRequest> = (0..u64::from(config.batch_size))
                .map(|offset| {
                    PageRequest::new(
                        url.clone(),
                        current_page + offset,
                        config.credentials.api_key.as_str(),
                        &config.params,
                        config.per_page,
                    )
                })
                .collect();

            let responses = self.executor.run(batch).await;
            report.batches += 1;

            let mut exhausted = false;
            for response in responses {
                match classify(&response, &config.extractor)? {
                    PageOutcome::Items(items) => {
                        exhausted |= items.len() < config.per_page as usize;
                        report.pages_fetched += 1;
                        report.items.extend(items);
                    }
                    PageOutcome::Failed(failure) => {
                        report.failed_pages.push(FailedPage {
                            page: response.page,
                            failure,
                        });
                    }
                }
            }

            debug!(
                first_page = current_page,
                batch_size = config.batch_size,
                items = report.items.len(),
                exhausted,
                "batch complete"
            );

            if exhausted {
                break;
            }
            current_page += u64::from(config.batch_size);
        }

        Ok(report)
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for Fetcher<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("executor", &self.executor)
            .finish()
    }
}

/// Fetch all pages of `config`'s endpoint with a fresh HTTP executor.
///
/// The executor's concurrency cap equals the batch size, so a whole batch is
/// in flight at once. Each call owns its own executor and accumulator.
pub async fn fetch(config: &FetchConfig) -> Result<Vec<JsonValue>> {
    config.validate()?;
    let executor = HttpExecutor::new(config.batch_size as usize);
    Fetcher::new(executor).fetch(config).await
}

/// Like [`fetch`], but returns the full [`FetchReport`]
pub async fn fetch_report(config: &FetchConfig) -> Result<FetchReport> {
    config.validate()?;
    let executor = HttpExecutor::new(config.batch_size as usize);
    Fetcher::new(executor).fetch_report(config).await
}
