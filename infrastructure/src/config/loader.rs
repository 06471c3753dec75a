//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./policyq.toml` or `./.policyq.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/policyq/config.toml`
    /// 4. Fallback: `~/.config/policyq/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut sources = Vec::new();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                sources.push(global_path);
            }
        }

        if let Some(path) = Self::project_config_path() {
            sources.push(path);
        }

        if let Some(path) = config_path {
            sources.push(path.clone());
        }

        Self::merge_files(&sources)
    }

    /// Merge config files over the defaults, in order. Later files win on a
    /// per-key basis.
    fn merge_files(paths: &[PathBuf]) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));
        for path in paths {
            figment = figment.merge(Toml::file(path));
        }
        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/policyq/config.toml if set, otherwise falls
    /// back to ~/.config/policyq/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("policyq").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["policyq.toml", ".policyq.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_any_file() {
        let config = ConfigLoader::load_defaults();
        assert!(config.backend.base_url.is_none());
        assert_eq!(config.ask.top_k, 5);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[backend]
base_url = "http://hr.internal:8000"
timeout_secs = 5

[ask]
top_k = 3
"#
        )
        .unwrap();

        let path = file.path().to_path_buf();
        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("http://hr.internal:8000")
        );
        assert_eq!(config.backend.timeout_secs, 5);
        assert_eq!(config.ask.top_k, 3);
        // Untouched sections keep their defaults.
        assert!(config.output.color);
    }

    #[test]
    fn later_file_overrides_earlier_per_key() {
        let mut global = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            global,
            r#"
[backend]
base_url = "http://global:8000"

[ask]
top_k = 3
"#
        )
        .unwrap();

        let mut project = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            project,
            r#"
[ask]
top_k = 9
"#
        )
        .unwrap();

        let paths = vec![global.path().to_path_buf(), project.path().to_path_buf()];
        let config = ConfigLoader::merge_files(&paths).unwrap();
        // The later file wins where it speaks up...
        assert_eq!(config.ask.top_k, 9);
        // ...and stays out of the way where it does not.
        assert_eq!(config.backend.base_url.as_deref(), Some("http://global:8000"));
        assert_eq!(config.backend.timeout_secs, 30);
    }
}
