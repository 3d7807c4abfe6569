//! Runtime configuration read from the environment.

use std::{env, path::PathBuf};

use thiserror::Error;
use tracing::Level;

pub const DATA_PATH_VAR: &str = "CUSTOMER_CARD_DATA";
pub const LOG_LEVEL_VAR: &str = "CUSTOMER_CARD_LOG";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// JSON file replacing the embedded customer set.
    pub data_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            log_level: Level::INFO,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid log level {0:?} (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup(DATA_PATH_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(raw) if !raw.trim().is_empty() => parse_level(&raw)?,
            _ => Level::INFO,
        };

        Ok(Self {
            data_path,
            log_level,
        })
    }
}

fn parse_level(raw: &str) -> Result<Level, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidLogLevel(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_data_path_and_level() {
        let config = AppConfig::from_lookup(lookup(&[
            (DATA_PATH_VAR, " /tmp/customers.json "),
            (LOG_LEVEL_VAR, "DEBUG"),
        ]))
        .unwrap();

        assert_eq!(config.data_path, Some(PathBuf::from("/tmp/customers.json")));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config =
            AppConfig::from_lookup(lookup(&[(DATA_PATH_VAR, "  "), (LOG_LEVEL_VAR, "")])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn rejects_unknown_level() {
        let err = AppConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "loud")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLogLevel("loud".to_string()));
    }
}
