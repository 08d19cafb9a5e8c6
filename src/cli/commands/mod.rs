//! CLI command implementations
//!
//! Every command returns the process exit code. Dashboard-reading commands
//! share [`load_dashboard`], which prints the failure and maps it to a code.

pub mod init;
pub mod list;
pub mod show;
pub mod states;
pub mod summary;
pub mod validate;

use crate::adapters::datasource::connect_data_source;
use crate::config::{load_config, DashboardConfig, DataSourceTarget};
use crate::core::dashboard::Dashboard;
use crate::domain::{DashboardError, Result};
use std::path::Path;

/// Command completed
pub const EXIT_SUCCESS: i32 = 0;
/// Configuration missing or invalid
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Requested clinic does not exist
pub const EXIT_NOT_FOUND: i32 = 3;
/// Data source unreachable or returned bad data
pub const EXIT_FETCH_ERROR: i32 = 4;
/// Any other failure
pub const EXIT_FATAL: i32 = 5;

/// Exit code for a dashboard error
pub fn exit_code_for(error: &DashboardError) -> i32 {
    match error {
        DashboardError::Configuration(_) => EXIT_CONFIG_ERROR,
        DashboardError::Fetch(_) => EXIT_FETCH_ERROR,
        _ => EXIT_FATAL,
    }
}

/// Loads the configuration, honouring a `--snapshot` override
///
/// With a snapshot path and no configuration file, every other setting takes
/// its default.
pub fn resolve_config(config_path: &str, snapshot: Option<&str>) -> Result<DashboardConfig> {
    match snapshot {
        Some(path) if !Path::new(config_path).exists() => {
            tracing::debug!(config_path, "No configuration file, using snapshot defaults");
            Ok(DashboardConfig::for_snapshot_file(path))
        }
        Some(path) => {
            let mut config = load_config(config_path)?;
            config.data_source.target = DataSourceTarget::File;
            config.data_source.snapshot_path = Some(path.to_string());
            Ok(config)
        }
        None => load_config(config_path),
    }
}

/// Connects, fetches one snapshot and builds the dashboard
///
/// On failure the error is printed and the matching exit code returned.
pub async fn load_dashboard(
    config_path: &str,
    snapshot: Option<&str>,
) -> std::result::Result<(DashboardConfig, Dashboard), i32> {
    let config = match resolve_config(config_path, snapshot) {
        Ok(c) => c,
        Err(e) => {
            println!("❌ Failed to load configuration file");
            println!("   Error: {e}");
            return Err(EXIT_CONFIG_ERROR);
        }
    };

    let source = match connect_data_source(&config.data_source).await {
        Ok(s) => s,
        Err(e) => {
            crate::log_error_with_context!(&e, "Failed to connect to data source");
            println!("❌ Failed to connect to data source");
            println!("   Error: {e}");
            return Err(match e {
                DashboardError::Configuration(_) => EXIT_CONFIG_ERROR,
                _ => EXIT_FETCH_ERROR,
            });
        }
    };

    let result = Dashboard::load(source.as_ref(), &config).await;
    source.close();

    match result {
        Ok(dashboard) => Ok((config, dashboard)),
        Err(e) => {
            crate::log_error_with_context!(&e, "Failed to build dashboard");
            println!("❌ {e}");
            Err(exit_code_for(&e))
        }
    }
}
