//! Init command implementation
//!
//! Writes a sample configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "clinic-dashboard.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG_ERROR);
        }

        match fs::write(&self.output, sample_config()) {
            Ok(()) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set database_url in {}", self.output);
                println!("  2. Put CLINIC_DB_SECRET in your environment or a .env file");
                println!("  3. Validate configuration: clinic-dashboard validate-config");
                println!("  4. View the fleet: clinic-dashboard summary");
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }
}

/// Sample configuration with every section and its defaults
pub fn sample_config() -> &'static str {
    r#"# Clinic Dashboard Configuration

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[data_source]
# realtime_database | file
target = "realtime_database"
database_url = "https://your-project-default-rtdb.firebaseio.com"
# Database secret or ID token, appended as ?auth=
auth_secret = "${CLINIC_DB_SECRET}"
timeout_seconds = 60
# Used when target = "file"
# snapshot_path = "export.json"

[collections]
facility = "facility_data"
location = "location_details"
operational = "operational_status"
master_inventory = "master_inventory"
region_inventory = "inventory"

[inventory]
# Fail instead of warning when a clinic is stocked under two regions
strict_region_uniqueness = false

[display]
currency_symbol = "₹"

[logging]
local_enabled = false
local_path = "logs"
# daily | hourly | never
local_rotation = "daily"
"#
}
