//! Data source factory
//!
//! Selects the [`DataSource`] implementation from configuration.

use super::file::JsonFileSource;
use super::realtime::RealtimeDbClient;
use super::traits::DataSource;
use crate::config::{DataSourceConfig, DataSourceTarget};
use crate::domain::{DashboardError, Result};

/// Connect to the data source named by `data_source.target`
///
/// # Errors
///
/// Returns an error if the selected source cannot be opened: a missing or
/// invalid URL, or an unreadable snapshot file.
pub async fn connect_data_source(config: &DataSourceConfig) -> Result<Box<dyn DataSource>> {
    match config.target {
        DataSourceTarget::RealtimeDatabase => {
            tracing::info!("Creating realtime database client");
            let client = RealtimeDbClient::connect(config)?;
            Ok(Box::new(client) as Box<dyn DataSource>)
        }
        DataSourceTarget::File => {
            let path = config.snapshot_path.as_deref().ok_or_else(|| {
                DashboardError::Configuration(
                    "data_source.snapshot_path is required when target = 'file'".to_string(),
                )
            })?;

            tracing::info!(path, "Creating snapshot file source");
            let source = JsonFileSource::open(path).await?;
            Ok(Box::new(source) as Box<dyn DataSource>)
        }
    }
}
