//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Data source selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceTarget {
    /// Remote realtime database over REST
    RealtimeDatabase,
    /// Local JSON export of the database
    File,
}

impl std::str::FromStr for DataSourceTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "realtime_database" => Ok(DataSourceTarget::RealtimeDatabase),
            "file" => Ok(DataSourceTarget::File),
            other => Err(format!(
                "Invalid data source target '{other}'. Must be one of: realtime_database, file"
            )),
        }
    }
}

/// Main dashboard configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Where the snapshot is read from
    pub data_source: DataSourceConfig,

    /// Names of the five source collections
    #[serde(default)]
    pub collections: CollectionsConfig,

    /// Inventory matching rules
    #[serde(default)]
    pub inventory: InventoryConfig,

    /// Presentation settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Configuration reading a local snapshot file with every other setting at
    /// its default
    pub fn for_snapshot_file(path: impl Into<String>) -> Self {
        Self {
            application: ApplicationConfig::default(),
            data_source: DataSourceConfig {
                target: DataSourceTarget::File,
                database_url: None,
                auth_secret: None,
                timeout_seconds: default_timeout_seconds(),
                snapshot_path: Some(path.into()),
            },
            collections: CollectionsConfig::default(),
            inventory: InventoryConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.data_source.validate()?;
        self.collections.validate()?;
        self.display.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Which implementation to use
    pub target: DataSourceTarget,

    /// Root URL of the realtime database (required for `realtime_database`)
    #[serde(default)]
    pub database_url: Option<String>,

    /// Database secret or ID token appended as `auth` (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default, skip_serializing)]
    pub auth_secret: Option<SecretString>,

    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Path to a JSON export (required for `file`)
    #[serde(default)]
    pub snapshot_path: Option<String>,
}

impl DataSourceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.timeout_seconds == 0 || self.timeout_seconds > 600 {
            return Err(format!(
                "data_source.timeout_seconds must be between 1 and 600, got {}",
                self.timeout_seconds
            ));
        }

        match self.target {
            DataSourceTarget::RealtimeDatabase => {
                let raw = self.database_url.as_deref().ok_or_else(|| {
                    "data_source.database_url is required when target = 'realtime_database'"
                        .to_string()
                })?;
                let parsed = url::Url::parse(raw)
                    .map_err(|e| format!("data_source.database_url '{raw}' is invalid: {e}"))?;
                if parsed.scheme() != "https" && parsed.scheme() != "http" {
                    return Err(format!(
                        "data_source.database_url must use http or https, got '{}'",
                        parsed.scheme()
                    ));
                }
            }
            DataSourceTarget::File => match self.snapshot_path.as_deref() {
                Some(path) if !path.trim().is_empty() => {}
                _ => {
                    return Err(
                        "data_source.snapshot_path is required when target = 'file'".to_string()
                    )
                }
            },
        }

        Ok(())
    }
}

/// Source collection names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionsConfig {
    /// Authoritative clinic universe
    #[serde(default = "default_facility_collection")]
    pub facility: String,

    #[serde(default = "default_location_collection")]
    pub location: String,

    #[serde(default = "default_operational_collection")]
    pub operational: String,

    #[serde(default = "default_master_inventory_collection")]
    pub master_inventory: String,

    #[serde(default = "default_region_inventory_collection")]
    pub region_inventory: String,
}

impl CollectionsConfig {
    /// All five names in fetch order
    pub fn names(&self) -> [&str; 5] {
        [
            self.facility.as_str(),
            self.location.as_str(),
            self.operational.as_str(),
            self.master_inventory.as_str(),
            self.region_inventory.as_str(),
        ]
    }

    fn validate(&self) -> Result<(), String> {
        if self.names().iter().any(|name| name.trim().is_empty()) {
            return Err("collection names cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            facility: default_facility_collection(),
            location: default_location_collection(),
            operational: default_operational_collection(),
            master_inventory: default_master_inventory_collection(),
            region_inventory: default_region_inventory_collection(),
        }
    }
}

/// Inventory matching configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Fail the load when a clinic is stocked under two regions; otherwise warn
    /// and let the first region by name win
    #[serde(default)]
    pub strict_region_uniqueness: bool,
}

/// Presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix for monetary values
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.currency_symbol.chars().count() > 4 {
            return Err(format!(
                "display.currency_symbol '{}' is longer than 4 characters",
                self.currency_symbol
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to rolling files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("local_path is required when local logging is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_facility_collection() -> String {
    "facility_data".to_string()
}

fn default_location_collection() -> String {
    "location_details".to_string()
}

fn default_operational_collection() -> String {
    "operational_status".to_string()
}

fn default_master_inventory_collection() -> String {
    "master_inventory".to_string()
}

fn default_region_inventory_collection() -> String {
    "inventory".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
