//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `<home>/config.toml` - User-wide defaults
//! - Project: `.recipe/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Option values given on
//! the command line take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::options::OptionOverrides;

/// Recipe configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Option overrides
    pub options: OptionOverrides,

    /// Generator output settings
    pub generate: GenerateConfig,
}

/// Generator output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GenerateConfig {
    /// Directory for generated files, relative to the project root
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration, or defaults if the file doesn't exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        self.options.merge(&other.options);

        if other.generate.output_dir.is_some() {
            self.generate.output_dir = other.generate.output_dir;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.recipe/config.toml)
/// 2. Global config (<home>/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Result<Config> {
    let mut config = Config::default();

    if global_path.exists() {
        tracing::debug!("Loading global config from {}", global_path.display());
        config.merge(Config::load_or_default(global_path)?);
    }

    if project_path.exists() {
        tracing::debug!("Loading project config from {}", project_path.display());
        config.merge(Config::load_or_default(project_path)?);
    }

    Ok(config)
}
