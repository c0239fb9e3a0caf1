//! TOML configuration file.
//!
//! An optional file tunes the binary without repeating flags every time:
//!
//! ```toml
//! [injector]
//! scripts_dir = "/home/me/overrides"
//! global_name = "_global"
//! max_include_depth = 16
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! # Serde default values
//!
//! Every field has a `#[serde(default = "...")]` helper, so an empty file, a
//! file with only one section, or no file at all yields a complete
//! [`AppConfig`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::config::{ResolverConfig, DEFAULT_MAX_INCLUDE_DEPTH};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub injector: InjectorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where override files live and how they are resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InjectorConfig {
    /// Directory the override files are read from.
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: PathBuf,
    /// Level name probed before every hostname.
    #[serde(default = "default_global_name")]
    pub global_name: String,
    /// Maximum nesting of include directives.
    #[serde(default = "default_max_include_depth")]
    pub max_include_depth: usize,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` level used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_scripts_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_global_name() -> String {
    cdi_core::GLOBAL_LEVEL_NAME.to_string()
}
fn default_max_include_depth() -> usize {
    DEFAULT_MAX_INCLUDE_DEPTH
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            scripts_dir: default_scripts_dir(),
            global_name: default_global_name(),
            max_include_depth: default_max_include_depth(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// The settings handed to the resolver.
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            global_name: self.injector.global_name.clone(),
            max_include_depth: self.injector.max_include_depth,
        }
    }
}

/// Loads the configuration at `path`.
///
/// A missing file is not an error: defaults are returned so the binary works
/// on first run.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file exists but cannot be read, and
/// [`ConfigError::Parse`] if it is not valid TOML for [`AppConfig`].
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(text) => AppConfig::from_toml_str(&text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
