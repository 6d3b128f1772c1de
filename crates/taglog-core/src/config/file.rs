//! File-based configuration (YAML or JSON)
//!
//! The user-level file lives at `~/.config/taglog/logging.yaml` (platform
//! config dir). Layouts in files can only use constant tokens; the `call`
//! token is added by `build_layout`, not by the file.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{ConfigError, ConfigResult};
use super::types::Configuration;

/// Configuration file format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
        }
    }

    /// Parse configuration text in this format
    pub fn parse(&self, content: &str) -> ConfigResult<Configuration> {
        match self {
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            ConfigFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

/// A configuration file on disk
///
/// # Example
///
/// ```no_run
/// use taglog_core::config::FileConfigSource;
///
/// let source = FileConfigSource::user();
/// if source.exists() {
///     let config = source.load().unwrap();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The user-level configuration file
    pub fn user() -> Self {
        Self::new(default_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read and parse the file
    pub fn load(&self) -> ConfigResult<Configuration> {
        let format = ConfigFormat::from_path(&self.path)?;
        let content = fs::read_to_string(&self.path)?;
        format.parse(&content)
    }
}

/// `<config dir>/taglog/logging.yaml`
pub fn default_config_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
    config_dir.join("taglog").join("logging.yaml")
}
