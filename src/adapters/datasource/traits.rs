//! Data source abstraction traits
//!
//! Every snapshot read goes through [`DataSource`], so the dashboard can be
//! driven by the remote realtime database or by a local JSON export.

use crate::domain::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Read-only access to named collections
///
/// Implementations never write. A collection that does not exist reads as
/// `Ok(None)`, which is distinct from a failed read.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Read one collection as raw JSON
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::DashboardError::Fetch`] if the collection
    /// cannot be read or decoded.
    async fn read_collection(&self, name: &str) -> Result<Option<Value>>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;

    /// Release the underlying connection
    ///
    /// Sources holding no resources can rely on the default, which just drops
    /// the value.
    fn close(self: Box<Self>) {
        tracing::debug!(source = %self.describe(), "Data source closed");
    }
}
