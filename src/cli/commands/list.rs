//! List command implementation
//!
//! Prints one line per clinic matching the filter selection.

use super::{load_dashboard, EXIT_FATAL, EXIT_SUCCESS};
use crate::cli::format::format_money;
use crate::core::filter::FilterCriteria;
use crate::domain::{ClinicRecord, ClosureStatus};
use clap::Args;

/// Message printed when the filters leave nothing to show
pub const NO_MATCHES_MESSAGE: &str = "No clinics found matching your search criteria.";

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only clinics in this state (exact match)
    #[arg(long)]
    pub state: Option<String>,

    /// Case-insensitive search in clinic code and name
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only clinics with region inventory
    #[arg(long)]
    pub matched_only: bool,
}

impl ListArgs {
    /// Filter selection built from the flags
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            state: self.state.clone(),
            search_text: self.search.clone(),
            matched_only: self.matched_only,
        }
    }

    /// Execute the list command
    pub async fn execute(&self, config_path: &str, snapshot: Option<&str>) -> anyhow::Result<i32> {
        let criteria = self.criteria();
        tracing::info!(?criteria, "Listing clinics");

        let (config, dashboard) = match load_dashboard(config_path, snapshot).await {
            Ok(loaded) => loaded,
            Err(code) => return Ok(code),
        };

        let clinics = dashboard.filter(&criteria);
        if clinics.is_empty() {
            println!("{NO_MATCHES_MESSAGE}");
            return Ok(EXIT_SUCCESS);
        }

        println!(
            "{:<12} {:<32} {:<18} {:<16} {:<12} {:>14}",
            "Code", "Clinic", "State", "Region", "Status", "Inventory"
        );
        println!("{}", "-".repeat(110));

        for clinic in &clinics {
            let view = match dashboard.clinic_view(clinic) {
                Ok(v) => v,
                Err(e) => {
                    crate::log_error_with_context!(&e, "Failed to value clinic");
                    println!("❌ {e}");
                    return Ok(EXIT_FATAL);
                }
            };

            println!(
                "{:<12} {:<32} {:<18} {:<16} {:<12} {:>14}",
                clinic.code.as_str(),
                truncate(clinic.name.as_deref().unwrap_or(""), 32),
                truncate(clinic.state.as_deref().unwrap_or(""), 18),
                truncate(clinic.region.as_deref().unwrap_or(""), 16),
                badge(clinic),
                format_money(view.valuation.total, &config.display.currency_symbol)
            );
        }

        println!();
        println!("{} of {} clinic(s)", clinics.len(), dashboard.clinics().len());
        Ok(EXIT_SUCCESS)
    }
}

/// Status badge with a marker for its case-insensitive reading
pub fn badge(clinic: &ClinicRecord) -> String {
    let marker = match clinic.badge_status() {
        ClosureStatus::Closed => "🔴",
        ClosureStatus::Pending => "🟡",
        ClosureStatus::Active => "🟢",
    };
    format!("{marker} {}", clinic.badge_label())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClinicCode;

    #[test]
    fn test_criteria_from_flags() {
        let args = ListArgs {
            state: Some("Goa".to_string()),
            search: None,
            matched_only: true,
        };
        let criteria = args.criteria();
        assert_eq!(criteria.state.as_deref(), Some("Goa"));
        assert!(criteria.matched_only);
    }

    #[test]
    fn test_badge_reads_status_case_insensitively() {
        let clinic = ClinicRecord::new(ClinicCode::new("C001").unwrap()).with_closure_status("closed");
        assert_eq!(badge(&clinic), "🔴 closed");

        let active = ClinicRecord::new(ClinicCode::new("C002").unwrap());
        assert_eq!(badge(&active), "🟢 Active");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Andheri", 10), "Andheri");
        assert_eq!(truncate("Indiranagar Main Road", 8), "Indiran…");
    }
}
