//! Concurrent HTTP batch executor
//!
//! # Overview
//!
//! The executor runs a batch of page requests in parallel up to a
//! concurrency cap and hands back one terminal [`RawResponse`] per request.
//! The `run` call returns only once every request in the batch has reached a
//! terminal state: success, timeout, transport failure, or HTTP error.
//!
//! Results come back in *completion order*, which is what funnels concurrent
//! completions safely to the single driving task that owns the accumulator.

mod http;
mod types;

pub use http::{ExecutorConfig, HttpExecutor};
pub use types::RawResponse;

use crate::request::PageRequest;
use async_trait::async_trait;

/// The concurrent request batch collaborator.
///
/// Implementations execute every request with bounded concurrency. They never
/// fail as a whole: transport-level problems are encoded in the per-request
/// [`RawResponse`], so a batch always yields exactly one response per
/// request.
#[async_trait]
pub trait BatchExecutor: Send + Sync {
    /// Execute the whole batch, returning terminal responses in completion
    /// order.
    async fn run(&self, batch: Vec<PageRequest>) -> Vec<RawResponse>;
}
