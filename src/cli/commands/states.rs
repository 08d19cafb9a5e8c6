//! States command implementation
//!
//! Lists the states available for `list --state`.

use super::{load_dashboard, EXIT_SUCCESS};
use clap::Args;

/// Arguments for the states command
#[derive(Args, Debug)]
pub struct StatesArgs {}

impl StatesArgs {
    /// Execute the states command
    pub async fn execute(&self, config_path: &str, snapshot: Option<&str>) -> anyhow::Result<i32> {
        let (_, dashboard) = match load_dashboard(config_path, snapshot).await {
            Ok(loaded) => loaded,
            Err(code) => return Ok(code),
        };

        if dashboard.states().is_empty() {
            println!("No states recorded.");
            return Ok(EXIT_SUCCESS);
        }

        for state in dashboard.states() {
            let count = dashboard
                .clinics()
                .iter()
                .filter(|c| c.state.as_deref() == Some(state.as_str()))
                .count();
            println!("{state} ({count})");
        }

        Ok(EXIT_SUCCESS)
    }
}
