//! Error types for pagehaul
//!
//! This module defines the fatal error hierarchy for the crate. All public
//! APIs return `Result<T, Error>` where Error is defined here.
//!
//! Page-level transport failures (timeouts, connection errors, non-success
//! statuses) are deliberately *not* represented here: they are classified
//! per page and never abort a fetch. See [`crate::classify::PageFailure`].

use thiserror::Error;

/// The main error type for pagehaul
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// General configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A config field holds an unusable value
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Offending field name
        field: String,
        /// Why the value is invalid
        message: String,
    },

    /// Base URL or endpoint could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Processing Errors
    // ============================================================================
    /// A success-status response body was not valid JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The caller-supplied extractor failed; a caller bug, fatal to the fetch
    #[error("Extractor failed on page {page}: {source}")]
    Extraction {
        /// Page whose body was being extracted
        page: u64,
        /// The extractor's error
        #[source]
        source: anyhow::Error,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an extraction error
    pub fn extraction(page: u64, source: anyhow::Error) -> Self {
        Self::Extraction { page, source }
    }
}

/// Result type alias for pagehaul
pub type Result<T> = std::result::Result<T, Error>;
