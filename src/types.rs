//! Common types used throughout pagehaul
//!
//! Shared type aliases and the extractor function type.

use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Extractor
// ============================================================================

/// Caller-supplied function mapping a parsed response body to the ordered
/// items it logically contains.
///
/// The extractor must be total over any JSON value the server may
/// legitimately return; an extractor failure is treated as a caller bug and
/// aborts the whole fetch.
pub type Extractor = Arc<dyn Fn(&JsonValue) -> anyhow::Result<Vec<JsonValue>> + Send + Sync>;

/// The default extractor: the response body itself is the item list.
///
/// Fails unless the body is a JSON array.
pub fn identity_extractor() -> Extractor {
    Arc::new(|body: &JsonValue| match body {
        JsonValue::Array(items) => Ok(items.clone()),
        other => anyhow::bail!("expected a JSON array response body, got {other}"),
    })
}
