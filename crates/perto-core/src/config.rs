use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let data_base_url = require("PERTO_DATA_BASE_URL")?;

    let env = parse_environment(&or_default("PERTO_ENV", "development"));

    let bind_addr = parse_addr("PERTO_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PERTO_LOG_LEVEL", "info");
    let sources_path = PathBuf::from(or_default("PERTO_SOURCES_PATH", "./config/sources.yaml"));

    let fetch_timeout_secs = parse_u64("PERTO_FETCH_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PERTO_USER_AGENT", "perto/0.1 (local-discovery)");
    let fetch_max_retries = parse_u32("PERTO_FETCH_MAX_RETRIES", "3")?;
    let fetch_retry_backoff_base_secs = parse_u64("PERTO_FETCH_RETRY_BACKOFF_BASE_SECS", "5")?;

    let geolocation_timeout_secs = parse_u64("PERTO_GEOLOCATION_TIMEOUT_SECS", "10")?;
    let search_result_cap = parse_usize("PERTO_SEARCH_RESULT_CAP", "7")?;

    Ok(AppConfig {
        data_base_url,
        env,
        bind_addr,
        log_level,
        sources_path,
        fetch_timeout_secs,
        user_agent,
        fetch_max_retries,
        fetch_retry_backoff_base_secs,
        geolocation_timeout_secs,
        search_result_cap,
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

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("PERTO_DATA_BASE_URL", "https://data.example.com/data");
        m
    }

    #[test]
    fn parse_environment_known_values() {
        assert_eq!(parse_environment("development"), Environment::Development);
        assert_eq!(parse_environment("test"), Environment::Test);
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_data_base_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "PERTO_DATA_BASE_URL"),
            "expected MissingEnvVar(PERTO_DATA_BASE_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = full_env();
        map.insert("PERTO_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PERTO_BIND_ADDR"),
            "expected InvalidEnvVar(PERTO_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_defaults() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.data_base_url, "https://data.example.com/data");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(
            cfg.sources_path.to_string_lossy(),
            "./config/sources.yaml"
        );
        assert_eq!(cfg.fetch_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "perto/0.1 (local-discovery)");
        assert_eq!(cfg.fetch_max_retries, 3);
        assert_eq!(cfg.fetch_retry_backoff_base_secs, 5);
        assert_eq!(cfg.geolocation_timeout_secs, 10);
        assert_eq!(cfg.search_result_cap, 7);
    }

    #[test]
    fn build_app_config_fetch_timeout_override() {
        let mut map = full_env();
        map.insert("PERTO_FETCH_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.fetch_timeout_secs, 60);
    }

    #[test]
    fn build_app_config_fetch_timeout_invalid() {
        let mut map = full_env();
        map.insert("PERTO_FETCH_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PERTO_FETCH_TIMEOUT_SECS"),
            "expected InvalidEnvVar(PERTO_FETCH_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_search_result_cap_override() {
        let mut map = full_env();
        map.insert("PERTO_SEARCH_RESULT_CAP", "12");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.search_result_cap, 12);
    }

    #[test]
    fn build_app_config_max_retries_invalid() {
        let mut map = full_env();
        map.insert("PERTO_FETCH_MAX_RETRIES", "three");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PERTO_FETCH_MAX_RETRIES"),
            "expected InvalidEnvVar(PERTO_FETCH_MAX_RETRIES), got: {result:?}"
        );
    }
}
