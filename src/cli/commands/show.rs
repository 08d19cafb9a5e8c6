//! Show command implementation
//!
//! Prints the expanded card for one clinic: valuation per catalog item, region
//! inventory, status information and relocation state.

use super::list::badge;
use super::{load_dashboard, EXIT_FATAL, EXIT_NOT_FOUND, EXIT_SUCCESS};
use crate::cli::format::{format_count, format_money};
use crate::core::dashboard::ClinicView;
use crate::domain::ClinicCode;
use clap::Args;
use std::fmt::Write;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Clinic code (exact, case-sensitive, not blank)
    pub code: ClinicCode,
}

impl ShowArgs {
    /// Execute the show command
    pub async fn execute(&self, config_path: &str, snapshot: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(code = %self.code, "Showing clinic");

        let (config, dashboard) = match load_dashboard(config_path, snapshot).await {
            Ok(loaded) => loaded,
            Err(code) => return Ok(code),
        };

        let Some(clinic) = dashboard.find_clinic(self.code.as_str()) else {
            println!("❌ Clinic not found: {}", self.code);
            return Ok(EXIT_NOT_FOUND);
        };

        match dashboard.clinic_view(clinic) {
            Ok(view) => {
                print!("{}", render_card(&view, &config.display.currency_symbol));
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Failed to value clinic");
                println!("❌ {e}");
                Ok(EXIT_FATAL)
            }
        }
    }
}

/// Renders the expanded clinic card
pub fn render_card(view: &ClinicView<'_>, currency_symbol: &str) -> String {
    let clinic = view.record;
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    let mut out = String::new();

    let _ = writeln!(out, "🏥 {} ({})", text(&clinic.name), clinic.code);
    let _ = writeln!(out, "   Status:    {}", badge(clinic));
    let _ = writeln!(out, "   Branch:    {}", text(&clinic.branch_name));
    let _ = writeln!(out, "   Region:    {}", text(&clinic.region));
    let _ = writeln!(out, "   State:     {}", text(&clinic.state));
    let _ = writeln!(out, "   Started:   {}", text(&clinic.start_date));
    let _ = writeln!(
        out,
        "   Inventory: {}",
        format_money(view.valuation.total, currency_symbol)
    );

    out.push_str("\nMaster Inventory\n");
    if view.valuation.items.is_empty() {
        out.push_str("  (no catalog loaded)\n");
    }
    for (item, valued) in &view.valuation.items {
        let _ = write!(out, "  {:<16} {}", format!("{item}:"), format_count(valued.quantity));
        if let Some(line) = valued.line_total().filter(|_| valued.quantity > 0) {
            let _ = write!(out, " ({})", format_money(line, currency_symbol));
        }
        out.push('\n');
    }

    if let Some(region) = &view.region_inventory {
        let _ = writeln!(out, "\nCurrent Inventory ({})", region.region);
        for (item, quantity) in region.inventory {
            let _ = writeln!(out, "  {:<16} {}", format!("{item}:"), format_count(*quantity));
        }
    }

    out.push_str("\nStatus Information\n");
    let _ = writeln!(out, "  Closure Week:  {}", text(&clinic.closure_week));
    let _ = writeln!(
        out,
        "  Rent Status:   {}",
        clinic.rent_status.as_ref().map(|s| s.as_str()).unwrap_or_default()
    );
    let _ = writeln!(out, "  Ageing:        {}", text(&clinic.ageing));
    let _ = writeln!(out, "  Security:      {}", clinic.security_deposit_label());

    if let Some(relocation) = &clinic.relocation_info {
        out.push_str("\n🚚 Relocation Status\n");
        for (kind, entry) in relocation {
            let _ = write!(out, "  {:<16} {}", format!("{kind}:"), entry.status_label());
            if let Some(to) = entry.relocated_to.as_deref().filter(|to| !to.is_empty()) {
                let _ = write!(out, " (to {to})");
            }
            out.push('\n');
        }
    }

    out
}
