//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::DashboardConfig;
use super::secret::secret_string;
use crate::domain::errors::DashboardError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Prefix for environment overrides (`CLINIC_<SECTION>_<KEY>`)
pub const ENV_PREFIX: &str = "CLINIC";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`DashboardConfig`]
/// 4. Applies environment variable overrides (`CLINIC_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`DashboardError::Configuration`] if the file cannot be read,
/// references unset variables, fails to parse, or fails validation.
///
/// # Examples
///
/// ```no_run
/// use clinic_dashboard::config::loader::load_config;
///
/// let config = load_config("clinic-dashboard.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<DashboardConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DashboardError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        DashboardError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut config = parse_config(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        DashboardError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    tracing::debug!(path = %path.display(), target = ?config.data_source.target, "Configuration loaded");

    Ok(config)
}

/// Substitutes `${VAR}` placeholders and parses the result, without overrides
/// or validation
pub fn parse_config(contents: &str) -> Result<DashboardConfig> {
    let contents = substitute_env_vars(contents)?;
    toml::from_str(&contents)
        .map_err(|e| DashboardError::Configuration(format!("Failed to parse TOML: {e}")))
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        #[allow(clippy::expect_used)]
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = placeholder_pattern();
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(DashboardError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(section: &str, key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}_{section}_{key}")).ok()
}

/// Applies environment variable overrides using the `CLINIC_*` prefix
///
/// Variables follow the pattern `CLINIC_<SECTION>_<KEY>`, for example
/// `CLINIC_DATA_SOURCE_DATABASE_URL` or `CLINIC_COLLECTIONS_FACILITY`.
///
/// # Errors
///
/// Returns an error for an override that cannot be parsed (an unknown
/// target, a non-numeric timeout)
fn apply_env_overrides(config: &mut DashboardConfig) -> Result<()> {
    if let Some(val) = env_override("APPLICATION", "LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Data source overrides
    if let Some(val) = env_override("DATA_SOURCE", "TARGET") {
        config.data_source.target = val.parse().map_err(DashboardError::Configuration)?;
    }
    if let Some(val) = env_override("DATA_SOURCE", "DATABASE_URL") {
        config.data_source.database_url = Some(val);
    }
    if let Some(val) = env_override("DATA_SOURCE", "AUTH_SECRET") {
        config.data_source.auth_secret = Some(secret_string(val));
    }
    if let Some(val) = env_override("DATA_SOURCE", "TIMEOUT_SECONDS") {
        config.data_source.timeout_seconds = val.parse().map_err(|_| {
            DashboardError::Configuration(format!(
                "{ENV_PREFIX}_DATA_SOURCE_TIMEOUT_SECONDS must be a number, got '{val}'"
            ))
        })?;
    }
    if let Some(val) = env_override("DATA_SOURCE", "SNAPSHOT_PATH") {
        config.data_source.snapshot_path = Some(val);
    }

    // Collection overrides
    let collections = &mut config.collections;
    for (key, slot) in [
        ("FACILITY", &mut collections.facility),
        ("LOCATION", &mut collections.location),
        ("OPERATIONAL", &mut collections.operational),
        ("MASTER_INVENTORY", &mut collections.master_inventory),
        ("REGION_INVENTORY", &mut collections.region_inventory),
    ] {
        if let Some(val) = env_override("COLLECTIONS", key) {
            *slot = val;
        }
    }

    if let Some(val) = env_override("INVENTORY", "STRICT_REGION_UNIQUENESS") {
        config.inventory.strict_region_uniqueness = val.parse().unwrap_or(false);
    }

    if let Some(val) = env_override("DISPLAY", "CURRENCY_SYMBOL") {
        config.display.currency_symbol = val;
    }

    // Logging overrides
    if let Some(val) = env_override("LOGGING", "LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = env_override("LOGGING", "LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
