// Clinic Dashboard - clinic facility, inventory and relocation overview
// Copyright (c) 2025 Clinic Dashboard Contributors
// Licensed under the MIT License

//! # Clinic Dashboard
//!
//! A read-only dashboard over a realtime database holding clinic facility
//! records, a global equipment catalog and per-region stocked inventory.
//!
//! ## Overview
//!
//! This library provides:
//! - **Fetching** the five source collections as one consistent snapshot
//! - **Merging** facility, location and operational data per clinic
//! - **Valuing** the equipment catalog per clinic, with fans excluded for
//!   in-house clinics
//! - **Aggregating** fleet statistics and **filtering** the clinic list
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Snapshot fetch, merge, valuation, matching, statistics, filtering
//! - [`adapters`] - Realtime database and JSON file data sources
//! - [`domain`] - Clinic, catalog and inventory types, errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinic_dashboard::adapters::datasource::connect_data_source;
//! use clinic_dashboard::config::load_config;
//! use clinic_dashboard::core::dashboard::Dashboard;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("clinic-dashboard.toml")?;
//!
//!     let source = connect_data_source(&config.data_source).await?;
//!     let dashboard = Dashboard::load(source.as_ref(), &config).await?;
//!     source.close();
//!
//!     let stats = dashboard.stats();
//!     println!("{} clinics, {} active", stats.total_clinics, stats.active_clinics);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], carrying a
//! [`domain::DashboardError`]. Any failure while building a dashboard aborts
//! the build; no partially populated dashboard is ever returned.
//!
//! ```rust,no_run
//! use clinic_dashboard::domain::DashboardError;
//!
//! fn example() -> Result<(), DashboardError> {
//!     let config = clinic_dashboard::config::load_config("clinic-dashboard.toml")?;
//!     println!("{}", config.collections.facility);
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(clinics = 120, "Dashboard built");
//! warn!(clinic = "C001", "Clinic stocked under two regions");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
