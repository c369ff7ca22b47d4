//! # Application configuration — `tally.toml`
//!
//! Defines the TOML configuration file read at startup (filename:
//! [`TallyConfig::filename`] = `"tally.toml"`). It names the backend the
//! console talks to and how verbose the diagnostics are.
//!
//! ## Structure
//!
//! ```toml
//! [backend]
//! base_url = "http://127.0.0.1:8000"   # collaborator every endpoint joins to
//!
//! [logging]
//! filter = "info"                      # tracing filter directive
//! ```
//!
//! All structs derive `Default` (with sensible production defaults) so that a
//! missing or empty config file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `tally.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL every endpoint path is joined to. No trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tracing filter directive, e.g. `"info"` or `"api=debug"`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl TallyConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: String) -> Self {
        Self {
            backend: BackendConfig { base_url },
            logging: LoggingConfig::default(),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "tally.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = TallyConfig::from_toml("").unwrap();
        assert_eq!(config, TallyConfig::default());
        assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_roundtrip() {
        let config = TallyConfig::new("https://finance.example.com".to_string());
        let toml = config.to_toml().unwrap();
        let parsed = TallyConfig::from_toml(&toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = TallyConfig::from_toml("[backend]\nbase_url = \"https://x.test\"\n").unwrap();
        assert_eq!(config.backend.base_url, "https://x.test");
        assert_eq!(config.logging.filter, "info");
    }
}
