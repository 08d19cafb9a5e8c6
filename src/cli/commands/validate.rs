//! Validate config command implementation

use super::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::{load_config, DashboardConfig, DataSourceTarget};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// [`load_config`] validates on load, so a loaded file is a valid one.
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                print!("{}", render_config_summary(&config));
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(EXIT_CONFIG_ERROR)
            }
        }
    }
}

/// Summary of the settings, secrets excluded
pub fn render_config_summary(config: &DashboardConfig) -> String {
    let mut lines = vec![
        "Configuration Summary:".to_string(),
        format!("  Log Level: {}", config.application.log_level),
    ];

    match config.data_source.target {
        DataSourceTarget::RealtimeDatabase => {
            lines.push("  Data Source: realtime database".to_string());
            lines.push(format!(
                "  Database URL: {}",
                config.data_source.database_url.as_deref().unwrap_or("-")
            ));
            lines.push(format!(
                "  Authenticated: {}",
                if config.data_source.auth_secret.is_some() { "yes" } else { "no" }
            ));
            lines.push(format!("  Timeout: {}s", config.data_source.timeout_seconds));
        }
        DataSourceTarget::File => {
            lines.push("  Data Source: snapshot file".to_string());
            lines.push(format!(
                "  Snapshot Path: {}",
                config.data_source.snapshot_path.as_deref().unwrap_or("-")
            ));
        }
    }

    lines.push(format!("  Collections: {}", config.collections.names().join(", ")));
    lines.push(format!(
        "  Strict Region Uniqueness: {}",
        config.inventory.strict_region_uniqueness
    ));
    lines.push(format!("  Currency Symbol: {}", config.display.currency_symbol));
    lines.push(format!(
        "  File Logging: {}",
        if config.logging.local_enabled {
            format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
        } else {
            "disabled".to_string()
        }
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
