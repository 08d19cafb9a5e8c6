//! Configuration management for the clinic dashboard.
//!
//! # Overview
//!
//! The dashboard reads a TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CLINIC_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clinic_dashboard::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clinic-dashboard.toml")?;
//!
//! println!("Data source: {:?}", config.data_source.target);
//! println!("Facility collection: {}", config.collections.facility);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`DataSourceConfig`] - Realtime database URL and secret, or snapshot file
//! - [`CollectionsConfig`] - Names of the five source collections
//! - [`InventoryConfig`] - Region matching rules
//! - [`DisplayConfig`] - Currency symbol
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [data_source]
//! target = "realtime_database"
//! database_url = "https://clinic-inventory.firebaseio.com"
//! auth_secret = "${CLINIC_DB_SECRET}"
//! timeout_seconds = 60
//!
//! [collections]
//! facility = "facility_data"
//! region_inventory = "inventory"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, CollectionsConfig, DashboardConfig, DataSourceConfig, DataSourceTarget,
    DisplayConfig, InventoryConfig, LoggingConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
