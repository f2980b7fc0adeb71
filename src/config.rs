use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::TagPattern;
use crate::error::{PubverError, Result};
use crate::registry::DEFAULT_REGISTRY_URL;

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "pubver.toml";

/// Environment variable overriding `registry.url`
pub const REGISTRY_URL_ENV: &str = "PUBVER_REGISTRY_URL";

/// Represents the complete configuration for pubver.
///
/// Contains the registry endpoint, the file names of the version sources and
/// the tag naming pattern.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub tags: TagsConfig,
}

fn default_registry_url() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("pubver/{}", env!("CARGO_PKG_VERSION"))
}

/// Where and how to reach the package registry.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RegistryConfig {
    #[serde(default = "default_registry_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl RegistryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            url: default_registry_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_manifest() -> String {
    "pubspec.yaml".to_string()
}

fn default_changelog() -> String {
    "CHANGELOG.md".to_string()
}

/// File names of the version sources, relative to the package directory.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_changelog")]
    pub changelog: String,
}

impl FilesConfig {
    pub fn manifest_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.manifest)
    }

    pub fn changelog_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.changelog)
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            manifest: default_manifest(),
            changelog: default_changelog(),
        }
    }
}

fn default_tag_pattern() -> String {
    "{version}".to_string()
}

/// Which tags count as release tags.
///
/// The default `{version}` accepts both `1.2.3` and `v1.2.3`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl TagsConfig {
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.pattern.as_str())
    }
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_tag_pattern(),
        }
    }
}

impl Config {
    /// Apply `PUBVER_REGISTRY_URL` and then an explicit URL, later wins
    pub fn with_registry_override(mut self, registry_url: Option<&str>) -> Self {
        if let Ok(url) = std::env::var(REGISTRY_URL_ENV) {
            if !url.trim().is_empty() {
                self.registry.url = url;
            }
        }
        if let Some(url) = registry_url {
            self.registry.url = url.to_string();
        }
        self
    }
}

/// Parse configuration text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(content).map_err(|e| PubverError::config(e.to_string()))?;
    // Surface a bad tag pattern at load time rather than mid-check
    config.tags.tag_pattern()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pubver.toml` in current directory
/// 3. `pubver/config.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let candidate = match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(PubverError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        }
        None => [
            Some(PathBuf::from(CONFIG_FILE_NAME)),
            dirs::config_dir().map(|dir| dir.join("pubver").join("config.toml")),
        ]
        .into_iter()
        .flatten()
        .find(|path| path.is_file()),
    };

    match candidate {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            parse_config(&fs::read_to_string(&path)?)
        }
        None => Ok(Config::default()),
    }
}
