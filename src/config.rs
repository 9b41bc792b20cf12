//! Scaffora configuration management.
//!
//! Handles the configuration file at:
//! - Linux/macOS: ~/.config/scaffora/config.toml
//! - Windows: %APPDATA%\scaffora\config.toml
//!
//! CLI flags override file values; the file overrides the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fs_utils;
use crate::{Result, ScafforaError};

/// Scaffora configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScafforaConfig {
    /// Namespace inference settings
    #[serde(default)]
    pub namespace: NamespaceConfig,

    /// Template settings
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// Project discovery settings
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Namespace inference configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceConfig {
    /// Write a namespace declaration into new files
    #[serde(default = "default_true")]
    pub include: bool,

    /// Reuse the namespace of files already in the destination directory
    #[serde(default = "default_true")]
    pub use_neighbors: bool,

    /// Mirror directory nesting below the project directory in the namespace
    #[serde(default = "default_true")]
    pub include_subdirectories: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            include: true,
            use_neighbors: true,
            include_subdirectories: true,
        }
    }
}

/// Template configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplatesConfig {
    /// Directory of user templates layered over the built-ins
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Project discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directory names never descended into
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
}

fn default_excluded_dirs() -> Vec<String> {
    ["bin", "obj", ".git", ".vs", "node_modules"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: default_excluded_dirs(),
        }
    }
}

/// Default location of the configuration file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scaffora")
        .join("config.toml")
}

impl ScafforaConfig {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ScafforaError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ScafforaError::ConfigError {
            message: format!("Failed to parse config: {}", e),
        })
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScafforaError::IoError {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| ScafforaError::ConfigError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        // Atomic write
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(|e| ScafforaError::IoError {
            path: temp_path.clone(),
            message: e.to_string(),
        })?;

        fs_utils::atomic_rename(&temp_path, path).map_err(|e| ScafforaError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    /// Get a configuration value by key path (e.g., "namespace.include")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["namespace", "include"] => Some(self.namespace.include.to_string()),
            ["namespace", "use_neighbors"] => Some(self.namespace.use_neighbors.to_string()),
            ["namespace", "include_subdirectories"] => {
                Some(self.namespace.include_subdirectories.to_string())
            }
            ["templates", "dir"] => self.templates.dir.as_ref().map(|p| p.display().to_string()),
            ["discovery", "excluded_dirs"] => Some(self.discovery.excluded_dirs.join(", ")),
            _ => None,
        }
    }

    /// Set a configuration value by key path
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["namespace", "include"] => self.namespace.include = parse_bool(key, value)?,
            ["namespace", "use_neighbors"] => {
                self.namespace.use_neighbors = parse_bool(key, value)?
            }
            ["namespace", "include_subdirectories"] => {
                self.namespace.include_subdirectories = parse_bool(key, value)?
            }
            ["templates", "dir"] => {
                if value.is_empty() {
                    self.templates.dir = None;
                } else {
                    self.templates.dir = Some(PathBuf::from(value));
                }
            }
            ["discovery", "excluded_dirs"] => {
                self.discovery.excluded_dirs = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            _ => {
                return Err(ScafforaError::ConfigError {
                    message: format!("Unknown configuration key: {}", key),
                });
            }
        }
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Display configuration as formatted text
    pub fn display(&self) -> String {
        let mut output = String::new();

        output.push_str("[namespace]\n");
        output.push_str(&format!("include = {}\n", self.namespace.include));
        output.push_str(&format!("use_neighbors = {}\n", self.namespace.use_neighbors));
        output.push_str(&format!(
            "include_subdirectories = {}\n",
            self.namespace.include_subdirectories
        ));

        output.push_str("\n[templates]\n");
        if let Some(dir) = &self.templates.dir {
            output.push_str(&format!("dir = \"{}\"\n", dir.display()));
        } else {
            output.push_str("# dir = \"~/templates/csharp\" (built-ins only)\n");
        }

        output.push_str("\n[discovery]\n");
        output.push_str(&format!(
            "excluded_dirs = {:?}\n",
            self.discovery.excluded_dirs
        ));

        output
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value.parse().map_err(|_| ScafforaError::ConfigError {
        message: format!("Invalid value for {}: {} (expected true or false)", key, value),
    })
}
