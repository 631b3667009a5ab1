/// Environment-driven configuration and logging setup.
use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Path of the catalog data file.
pub const DATA_ENV: &str = "CATALOG_LIST_DATA";

/// Tracing filter directive; falls back to `RUST_LOG`.
pub const LOG_ENV: &str = "CATALOG_LIST_LOG";

const DEFAULT_DATA_PATH: &str = "catalog.json";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            data_path: non_empty(DATA_ENV)
                .map_or_else(|| PathBuf::from(DEFAULT_DATA_PATH), PathBuf::from),
            log_filter: non_empty(LOG_ENV)
                .or_else(|| non_empty("RUST_LOG"))
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
        }
    }
}

/// Install the stderr tracing subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops). An unparsable
/// filter falls back to the default level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]);
        assert_eq!(c.data_path, PathBuf::from("catalog.json"));
        assert_eq!(c.log_filter, "warn");
    }

    #[test]
    fn test_overrides() {
        let c = config(&[(DATA_ENV, "/tmp/shop.json"), (LOG_ENV, "debug")]);
        assert_eq!(c.data_path, PathBuf::from("/tmp/shop.json"));
        assert_eq!(c.log_filter, "debug");
    }

    #[test]
    fn test_rust_log_fallback_and_blank_values() {
        let c = config(&[(DATA_ENV, "  "), ("RUST_LOG", "trace")]);
        assert_eq!(c.data_path, PathBuf::from("catalog.json"));
        assert_eq!(c.log_filter, "trace");
    }
}
