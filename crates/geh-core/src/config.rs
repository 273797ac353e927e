use crate::app_config::{ApiLayout, AppConfig, DetailLookup, Environment};
use crate::ConfigError;

const DEFAULT_API_BASE_URL: &str = "https://geh-backend.onrender.com";

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
/// Every variable has a default, so an empty environment is valid.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
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

    let env = parse_environment(&or_default("GEH_ENV", "development"));
    let log_level = or_default("GEH_LOG_LEVEL", "info");

    let api_base_url = parse_base_url(
        "GEH_API_BASE_URL",
        &or_default("GEH_API_BASE_URL", DEFAULT_API_BASE_URL),
    )?;
    let image_base_url = match lookup("GEH_IMAGE_BASE_URL") {
        Ok(raw) => parse_base_url("GEH_IMAGE_BASE_URL", &raw)?,
        Err(_) => api_base_url.clone(),
    };

    let api_layout = parse_api_layout(&or_default("GEH_API_LAYOUT", "legacy"))?;
    let detail_lookup = parse_detail_lookup(&or_default("GEH_DETAIL_LOOKUP", "direct"))?;

    let request_timeout_secs = parse_u64("GEH_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GEH_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("GEH_USER_AGENT", "geh/0.1 (storefront)");
    let currency = or_default("GEH_CURRENCY", "GHC");

    Ok(AppConfig {
        env,
        log_level,
        api_base_url,
        image_base_url,
        api_layout,
        detail_lookup,
        request_timeout_secs,
        user_agent,
        currency,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_api_layout(s: &str) -> Result<ApiLayout, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "legacy" => Ok(ApiLayout::Legacy),
        "v1" => Ok(ApiLayout::V1),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GEH_API_LAYOUT".to_string(),
            reason: format!("expected \"legacy\" or \"v1\", got \"{other}\""),
        }),
    }
}

fn parse_detail_lookup(s: &str) -> Result<DetailLookup, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "direct" => Ok(DetailLookup::Direct),
        "listing" => Ok(DetailLookup::Listing),
        other => Err(ConfigError::InvalidEnvVar {
            var: "GEH_DETAIL_LOOKUP".to_string(),
            reason: format!("expected \"direct\" or \"listing\", got \"{other}\""),
        }),
    }
}

/// Validates an http(s) base URL and strips trailing slashes.
fn parse_base_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty());
    if !has_host {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("\"{raw}\" is not an http(s) URL"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
