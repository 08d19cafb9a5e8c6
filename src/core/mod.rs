//! Core business logic for the clinic dashboard.
//!
//! # Modules
//!
//! - [`snapshot`] - Concurrent read of the five source collections
//! - [`merge`] - Joins facility, location and operational data per clinic
//! - [`valuation`] - Per-clinic catalog valuation with the fan exclusion
//! - [`matcher`] - Region inventory lookups
//! - [`stats`] - Fleet-wide statistics
//! - [`filter`] - State, search and matched-only filtering
//! - [`dashboard`] - Everything above assembled for one snapshot
//!
//! # Workflow
//!
//! 1. **Fetch**: read all collections; any failure aborts
//! 2. **Merge**: one record per facility key
//! 3. **Check**: region uniqueness (warn or fail)
//! 4. **Aggregate**: statistics, computed once per snapshot
//! 5. **Present**: filter the list and derive per-card views on demand
//!
//! # Example
//!
//! ```rust,no_run
//! use clinic_dashboard::adapters::datasource::connect_data_source;
//! use clinic_dashboard::config::load_config;
//! use clinic_dashboard::core::dashboard::Dashboard;
//! use clinic_dashboard::core::filter::FilterCriteria;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("clinic-dashboard.toml")?;
//! let source = connect_data_source(&config.data_source).await?;
//! let dashboard = Dashboard::load(source.as_ref(), &config).await?;
//! source.close();
//!
//! println!("Clinics: {}", dashboard.stats().total_clinics);
//! for clinic in dashboard.filter(&FilterCriteria::new().with_state("Maharashtra")) {
//!     println!("{}", clinic.code);
//! }
//! # Ok(())
//! # }
//! ```

pub mod dashboard;
pub mod filter;
pub mod matcher;
pub mod merge;
pub mod snapshot;
pub mod stats;
pub mod valuation;
