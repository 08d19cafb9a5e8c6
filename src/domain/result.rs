//! Result type alias for the dashboard
//!
//! This module provides a convenient Result type alias that uses
//! [`DashboardError`] as the error type.

use super::errors::DashboardError;

/// Result type alias for dashboard operations
///
/// # Examples
///
/// ```
/// use clinic_dashboard::domain::result::Result;
/// use clinic_dashboard::domain::errors::DashboardError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DashboardError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DashboardError>;
