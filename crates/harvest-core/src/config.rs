use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_COUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1/";
pub const DEFAULT_USER_AGENT: &str = "harvest/0.1 (item-scraper)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("HARVEST_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("HARVEST_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("HARVEST_USER_AGENT", DEFAULT_USER_AGENT);
    let countries_base_url = or_default("HARVEST_COUNTRIES_BASE_URL", DEFAULT_COUNTRIES_BASE_URL);
    let output_dir = PathBuf::from(or_default("HARVEST_OUTPUT_DIR", "."));

    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "HARVEST_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        countries_base_url,
        output_dir,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
