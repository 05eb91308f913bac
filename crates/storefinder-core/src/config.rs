use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Highest zoom level accepted for any zoom setting.
const MAX_ZOOM: f64 = 22.0;

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
/// Every setting has a default, so an empty environment yields a usable
/// configuration centred on New Delhi.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_in_range =
        |var: &str, default: &str, min: f64, max: f64| -> Result<f64, ConfigError> {
            let value = or_default(var, default)
                .trim()
                .parse::<f64>()
                .map_err(|e| invalid(var, e.to_string()))?;
            if value.is_finite() && (min..=max).contains(&value) {
                Ok(value)
            } else {
                Err(invalid(var, format!("{value} is outside {min}..={max}")))
            }
        };

    let parse_zoom = |var: &str, default: &str| -> Result<f64, ConfigError> {
        parse_in_range(var, default, 0.0, MAX_ZOOM)
    };

    let env = parse_environment(&or_default("STOREFINDER_ENV", "development"))?;
    let bind_addr = parse_addr("STOREFINDER_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STOREFINDER_LOG_LEVEL", "info");
    let dataset_path = PathBuf::from(or_default(
        "STOREFINDER_DATASET_PATH",
        "./public/data/data.json",
    ));

    let default_state = or_default("STOREFINDER_DEFAULT_STATE", "Delhi");
    let default_city = or_default("STOREFINDER_DEFAULT_CITY", "New Delhi");
    if default_state.trim().is_empty() && !default_city.trim().is_empty() {
        return Err(invalid(
            "STOREFINDER_DEFAULT_CITY",
            "a default city requires a default state".to_string(),
        ));
    }

    let default_center_lat =
        parse_in_range("STOREFINDER_DEFAULT_CENTER_LAT", "28.6139", -90.0, 90.0)?;
    let default_center_lng =
        parse_in_range("STOREFINDER_DEFAULT_CENTER_LNG", "77.2090", -180.0, 180.0)?;
    let default_zoom = parse_zoom("STOREFINDER_DEFAULT_ZOOM", "5")?;
    let single_store_zoom = parse_zoom("STOREFINDER_SINGLE_STORE_ZOOM", "15")?;
    let marker_focus_zoom = parse_zoom("STOREFINDER_MARKER_FOCUS_ZOOM", "16")?;
    let all_states_zoom_ceiling = parse_zoom("STOREFINDER_ALL_STATES_ZOOM_CEILING", "5")?;
    let state_zoom_ceiling = parse_zoom("STOREFINDER_STATE_ZOOM_CEILING", "8")?;

    let maps_api_key = lookup("STOREFINDER_MAPS_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        dataset_path,
        default_state,
        default_city,
        default_center_lat,
        default_center_lng,
        default_zoom,
        single_store_zoom,
        marker_focus_zoom,
        all_states_zoom_ceiling,
        state_zoom_ceiling,
        maps_api_key,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOREFINDER_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
