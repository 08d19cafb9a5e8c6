// Clinic Dashboard - clinic facility, inventory and relocation overview
// Copyright (c) 2025 Clinic Dashboard Contributors
// Licensed under the MIT License

use clap::Parser;
use clinic_dashboard::cli::commands::{resolve_config, EXIT_FATAL};
use clinic_dashboard::cli::{Cli, Commands};
use clinic_dashboard::logging::{init_logging, LoggingGuard};
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Clinic Dashboard");

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Initializes logging from the configuration file when it can be read
///
/// Configuration errors are reported by the command itself, so an unreadable
/// file falls back to console-only logging here.
fn setup_logging(cli: &Cli) -> clinic_dashboard::domain::Result<LoggingGuard> {
    let loaded = match cli.command {
        Commands::Init(_) | Commands::ValidateConfig(_) => None,
        _ => resolve_config(&cli.config, cli.snapshot.as_deref()).ok(),
    };

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "warn".to_string());
    let logging_config = loaded.map(|c| c.logging).unwrap_or_default();

    init_logging(&log_level, &logging_config)
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let snapshot = cli.snapshot.as_deref();
    match &cli.command {
        Commands::Summary(args) => args.execute(&cli.config, snapshot).await,
        Commands::List(args) => args.execute(&cli.config, snapshot).await,
        Commands::Show(args) => args.execute(&cli.config, snapshot).await,
        Commands::States(args) => args.execute(&cli.config, snapshot).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
