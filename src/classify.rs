//! Response classification
//!
//! Turns a [`RawResponse`] into a [`PageOutcome`]: either the items the page
//! contained, or a classified failure. Failures are logged with one
//! distinguishable event per class and contribute nothing to the result;
//! only a fully successful, parseable response produces items.
//!
//! A success-status response whose body is not valid JSON is fatal rather
//! than a page failure: the server is lying about its content and silently
//! dropping the page would hide that.

use crate::error::{Error, Result};
use crate::executor::RawResponse;
use crate::types::{Extractor, JsonValue};
use tracing::warn;

/// A classified page-level failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageFailure {
    /// Request exceeded the transport timeout
    TimedOut,
    /// Transport failed before any HTTP response arrived
    NoResponse {
        /// Transport error message
        message: String,
    },
    /// Server responded with a non-success status
    HttpStatus {
        /// The HTTP status code
        status: u16,
    },
}

impl std::fmt::Display for PageFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimedOut => write!(f, "request timed out"),
            Self::NoResponse { message } => write!(f, "no HTTP response: {message}"),
            Self::HttpStatus { status } => write!(f, "HTTP request failed: {status}"),
        }
    }
}

/// Result of classifying one page response
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// The page's extracted items, in response order
    Items(Vec<JsonValue>),
    /// The page failed; it contributes no items and never stops pagination
    Failed(PageFailure),
}

/// Classify a terminal response, running the extractor on success.
///
/// Returns `Err` only for fatal conditions: an unparseable success body or
/// an extractor fault.
pub fn classify(response: &RawResponse, extractor: &Extractor) -> Result<PageOutcome> {
    if response.timed_out {
        warn!(page = response.page, "page request timed out");
        return Ok(PageOutcome::Failed(PageFailure::TimedOut));
    }

    if response.status == 0 {
        let message = response
            .transport_error
            .clone()
            .unwrap_or_else(|| "unknown transport failure".to_string());
        warn!(page = response.page, %message, "no HTTP response received");
        return Ok(PageOutcome::Failed(PageFailure::NoResponse { message }));
    }

    if !response.is_success() {
        warn!(
            page = response.page,
            status = response.status,
            "page request failed"
        );
        return Ok(PageOutcome::Failed(PageFailure::HttpStatus {
            status: response.status,
        }));
    }

    let body: JsonValue = serde_json::from_str(&response.body)?;
    let items =
        extractor.as_ref()(&body).map_err(|source| Error::extraction(response.page, source))?;
    Ok(PageOutcome::Items(items))
}
