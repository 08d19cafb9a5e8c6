//! Domain error types
//!
//! This module defines the error hierarchy for the dashboard. Errors are
//! domain-specific and don't expose third-party types: HTTP client failures
//! are flattened into [`FetchError`] before they leave the adapters.

use thiserror::Error;

/// Main dashboard error type
///
/// Computation-layer errors ([`DashboardError::MissingSource`],
/// [`DashboardError::InvalidCatalogEntry`]) are returned to the caller
/// unmodified; the caller presents a single failure state instead of a
/// partially populated view.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The authoritative clinic collection is absent, so the clinic universe
    /// cannot be established
    #[error("Cannot build dashboard: source collection '{0}' is missing")]
    MissingSource(String),

    /// A catalog item lacks a quantity or unit cost, or carries a negative one
    #[error("Invalid catalog entry '{item}': {reason}")]
    InvalidCatalogEntry { item: String, reason: String },

    /// Reading a snapshot from the remote data source failed
    #[error("Error fetching data: {0}")]
    Fetch(#[from] FetchError),

    /// The same clinic is stocked under more than one region
    #[error("Clinic {clinic} appears in region inventory for both '{first}' and '{second}'")]
    DuplicateRegionAssignment {
        clinic: String,
        first: String,
        second: String,
    },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl DashboardError {
    /// Builds an [`DashboardError::InvalidCatalogEntry`] for `item`
    pub fn invalid_catalog_entry(item: impl Into<String>, reason: impl Into<String>) -> Self {
        DashboardError::InvalidCatalogEntry {
            item: item.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error originates from the remote data source
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, DashboardError::Fetch(_))
    }
}

/// Remote data source errors
///
/// Any one of these fails the entire snapshot fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to reach the data source
    #[error("Failed to connect to data source: {0}")]
    ConnectionFailed(String),

    /// Request did not complete within the configured timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx), including rejected credentials
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Body could not be decoded as JSON
    #[error("Invalid response from data source: {0}")]
    InvalidResponse(String),

    /// A specific collection could not be read or interpreted
    #[error("Failed to read collection '{collection}': {message}")]
    Collection { collection: String, message: String },
}

impl FetchError {
    /// Wraps another error with the name of the collection being read
    pub fn for_collection(collection: impl Into<String>, err: impl std::fmt::Display) -> Self {
        FetchError::Collection {
            collection: collection.into(),
            message: err.to_string(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::Configuration(format!("TOML parse error: {err}"))
    }
}
