//! Summary command implementation
//!
//! Prints the fleet statistics for the current snapshot.

use super::{load_dashboard, EXIT_FATAL, EXIT_SUCCESS};
use crate::cli::format::{format_count, format_money, format_percentage};
use crate::core::stats::AggregateStats;
use clap::Args;

/// Arguments for the summary command
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Print the statistics as JSON
    #[arg(long)]
    pub json: bool,
}

impl SummaryArgs {
    /// Execute the summary command
    pub async fn execute(&self, config_path: &str, snapshot: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Computing dashboard summary");

        let (config, dashboard) = match load_dashboard(config_path, snapshot).await {
            Ok(loaded) => loaded,
            Err(code) => return Ok(code),
        };

        if self.json {
            match serde_json::to_string_pretty(dashboard.stats()) {
                Ok(json) => {
                    println!("{json}");
                    return Ok(EXIT_SUCCESS);
                }
                Err(e) => {
                    println!("❌ Failed to serialize statistics: {e}");
                    return Ok(EXIT_FATAL);
                }
            }
        }

        println!("📊 Clinic Dashboard Summary");
        println!(
            "   Snapshot taken {}",
            dashboard.fetched_at().format("%Y-%m-%d %H:%M:%S UTC")
        );
        println!();
        print!("{}", render_summary(dashboard.stats(), &config.display.currency_symbol));

        Ok(EXIT_SUCCESS)
    }
}

/// Renders the statistics block
pub fn render_summary(stats: &AggregateStats, currency_symbol: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<28} {}\n",
        "Total Clinics:",
        format_count(stats.total_clinics as u64)
    ));
    out.push_str(&format!(
        "  {:<28} {} ({})\n",
        "Active Clinics:",
        format_count(stats.active_clinics as u64),
        format_percentage(stats.active_percentage())
    ));
    out.push_str(&format!(
        "  {:<28} {}\n",
        "Total Inventory Value:",
        format_money(stats.total_inventory_value, currency_symbol)
    ));
    out.push_str(&format!(
        "  {:<28} {} ({} of total)\n",
        "Pending Closures:",
        format_count(stats.pending_closures as u64),
        format_percentage(stats.pending_percentage())
    ));
    out.push_str(&format!(
        "  {:<28} {} ({} of total)\n",
        "Matched Inventory Clinics:",
        format_count(stats.matched_clinics as u64),
        format_percentage(stats.matched_percentage())
    ));

    out.push('\n');
    out.push_str("  Total Equipment Count:\n");
    if stats.total_items.is_empty() {
        out.push_str("    (no catalog loaded)\n");
    }
    for (item, count) in &stats.total_items {
        out.push_str(&format!("    {:<26} {}\n", format!("{item}:"), format_count(*count)));
    }

    out
}
