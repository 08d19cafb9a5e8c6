//! External system integrations.
//!
//! - [`datasource`] - Read-only access to the clinic collections, either over
//!   the realtime database REST API or from a local JSON export
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind the
//! [`datasource::DataSource`] trait, so the core engines can be exercised with
//! in-memory or file-backed sources in tests.
//!
//! ```rust,no_run
//! use clinic_dashboard::adapters::datasource::connect_data_source;
//! use clinic_dashboard::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clinic-dashboard.toml")?;
//! let source = connect_data_source(&config.data_source).await?;
//! let facilities = source.read_collection(&config.collections.facility).await?;
//! source.close();
//! # Ok(())
//! # }
//! ```

pub mod datasource;
