//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Default location of the persisted workout slot.
const DEFAULT_STORE_PATH: &str = "data/workouts.json";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON slot holding the persisted workout collection
    pub store_path: PathBuf,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store_path = match env::var("WORKOUT_STORE_PATH") {
            Ok(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Invalid("WORKOUT_STORE_PATH"))
            }
            Ok(raw) => PathBuf::from(raw.trim()),
            Err(_) => PathBuf::from(DEFAULT_STORE_PATH),
        };

        Ok(Self { store_path })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::set_var("WORKOUT_STORE_PATH", "/tmp/workouts-test.json");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.store_path, PathBuf::from("/tmp/workouts-test.json"));
        env::remove_var("WORKOUT_STORE_PATH");
    }

    #[test]
    fn test_config_default_path() {
        let config = Config::default();
        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
    }
}
