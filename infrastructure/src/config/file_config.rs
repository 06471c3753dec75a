//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use policyq_application::config::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection settings
    pub backend: FileBackendConfig,
    /// Ask request settings
    pub ask: FileAskConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// `[backend]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the policy backend, e.g. `http://localhost:8000`.
    /// Unset means the client cannot ask anything and fails fast at startup.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
        }
    }
}

/// `[ask]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAskConfig {
    /// Retrieval depth sent with every question.
    pub top_k: u32,
}

impl Default for FileAskConfig {
    fn default() -> Self {
        Self { top_k: DEFAULT_TOP_K }
    }
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Collapsed citation preview length in bytes
    pub preview_bytes: usize,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            preview_bytes: 240,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let config = FileConfig::default();
        assert!(config.backend.base_url.is_none());
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.ask.top_k, 5);
        assert!(config.output.color);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
[backend]
base_url = "http://localhost:8000"
"#,
        )
        .unwrap();
        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(config.ask.top_k, 5);
    }
}
