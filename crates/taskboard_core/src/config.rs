//! Environment-driven engine configuration.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "TASKBOARD_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TASKBOARD_LOG_DIR";
pub const ENV_SEED: &str = "TASKBOARD_SEED";

/// Startup configuration for a board store and its logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Durable store file. `None` uses an in-memory store.
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// Absolute log directory. `None` leaves logging off.
    pub log_dir: Option<PathBuf>,
    /// Run the one-time sample seeding when opening the store.
    pub seed_sample_data: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_sample_data: true,
        }
    }
}

impl CoreConfig {
    /// Loads configuration from process environment variables.
    ///
    /// | Env Var               | Default               |
    /// |-----------------------|-----------------------|
    /// | `TASKBOARD_DB_PATH`   | in-memory store       |
    /// | `TASKBOARD_LOG_LEVEL` | `default_log_level()` |
    /// | `TASKBOARD_LOG_DIR`   | logging disabled      |
    /// | `TASKBOARD_SEED`      | `true`                |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        Self {
            db_path: read(ENV_DB_PATH).map(PathBuf::from),
            log_level: read(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: read(ENV_LOG_DIR).map(PathBuf::from),
            seed_sample_data: read(ENV_SEED)
                .and_then(|value| parse_bool(&value))
                .unwrap_or(defaults.seed_sample_data),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, ENV_DB_PATH, ENV_LOG_DIR, ENV_SEED};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> CoreConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CoreConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), CoreConfig::default());
    }

    #[test]
    fn reads_paths_and_seed_flag() {
        let config = config_from(&[
            (ENV_DB_PATH, "/tmp/board.db"),
            (ENV_LOG_DIR, " /tmp/logs "),
            (ENV_SEED, "off"),
        ]);
        assert_eq!(config.db_path, Some(PathBuf::from("/tmp/board.db")));
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn unparseable_seed_flag_falls_back_to_default() {
        assert!(config_from(&[(ENV_SEED, "maybe")]).seed_sample_data);
        assert_eq!(config_from(&[(ENV_DB_PATH, "  ")]).db_path, None);
    }
}
