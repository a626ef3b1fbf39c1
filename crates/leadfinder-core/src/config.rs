use crate::app_config::{AppConfig, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid. A missing
/// `GEMINI_API_KEY` is not an error here; see
/// [`AppConfig::require_gemini_api_key`].
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
/// Returns `ConfigError` if a value is present but invalid. A missing
/// `GEMINI_API_KEY` is not an error here; see
/// [`AppConfig::require_gemini_api_key`].
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            _ => Ok(None),
        }
    };

    let gemini_api_key = optional("GEMINI_API_KEY");
    let gemini_model = or_default("LEADFINDER_GEMINI_MODEL", DEFAULT_GEMINI_MODEL);
    let gemini_base_url = or_default("LEADFINDER_GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL);
    let request_timeout_secs = parse_optional_u64("LEADFINDER_REQUEST_TIMEOUT_SECS")?;
    let data_dir = PathBuf::from(or_default("LEADFINDER_DATA_DIR", "./.leadfinder"));
    let log_level = or_default("LEADFINDER_LOG_LEVEL", "info");

    if request_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADFINDER_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        request_timeout_secs,
        data_dir,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
