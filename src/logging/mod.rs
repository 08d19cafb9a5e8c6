//! Logging and observability
//!
//! Structured logging with:
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Console output on stderr
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use clinic_dashboard::logging::init_logging;
//! use clinic_dashboard::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Dashboard started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a snapshot fetch
///
/// # Example
///
/// ```no_run
/// use clinic_dashboard::log_fetch_start;
///
/// log_fetch_start!("realtime database at https://clinics.example.com/", 5);
/// ```
#[macro_export]
macro_rules! log_fetch_start {
    ($source:expr, $collections:expr) => {
        tracing::info!(
            source = %$source,
            collections = $collections,
            "Fetching snapshot"
        );
    };
}

/// Log the completion of a snapshot fetch
///
/// # Example
///
/// ```no_run
/// use clinic_dashboard::log_fetch_complete;
/// use std::time::Duration;
///
/// log_fetch_complete!(120, Duration::from_millis(850));
/// ```
#[macro_export]
macro_rules! log_fetch_complete {
    ($clinics:expr, $duration:expr) => {
        tracing::info!(
            clinics = $clinics,
            duration_ms = $duration.as_millis() as u64,
            "Snapshot fetched"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use clinic_dashboard::log_error_with_context;
/// use clinic_dashboard::domain::DashboardError;
///
/// let error = DashboardError::MissingSource("facility_data".to_string());
/// log_error_with_context!(&error, "Failed to build dashboard");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
