//! CLI interface and argument parsing

pub mod commands;
pub mod format;

use clap::{Parser, Subcommand};

/// Clinic Dashboard - facility, inventory and relocation overview
#[derive(Parser, Debug)]
#[command(name = "clinic-dashboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "clinic-dashboard.toml",
        env = "CLINIC_DASHBOARD_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLINIC_DASHBOARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Read a local JSON export instead of the configured data source
    #[arg(long, global = true)]
    pub snapshot: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show fleet-wide statistics
    Summary(commands::summary::SummaryArgs),

    /// List clinics, optionally filtered
    List(commands::list::ListArgs),

    /// Show the expanded card for one clinic
    Show(commands::show::ShowArgs),

    /// List the states present in the data
    States(commands::states::StatesArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
