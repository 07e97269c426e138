//! Global context for recipe operations.
//!
//! Provides centralized access to configuration paths and environment.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::{BaseDirs, ProjectDirs};

use crate::core::manifest::{find_manifest, ManifestError};
use crate::util::config::{load_config, Config};

/// Platform-specific project directories.
static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("", "", "recipe"));

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for global recipe data
    home: PathBuf,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        let home = if let Some(dirs) = PROJECT_DIRS.as_ref() {
            dirs.config_dir().to_path_buf()
        } else {
            // Fallback to ~/.recipe
            BaseDirs::new()
                .map(|b| b.home_dir().join(".recipe"))
                .unwrap_or_else(|| PathBuf::from(".recipe"))
        };

        Ok(GlobalContext { cwd, home })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let mut ctx = Self::new()?;
        ctx.cwd = cwd;
        Ok(ctx)
    }

    /// Use a different home directory (global config location).
    pub fn with_home(mut self, home: PathBuf) -> Self {
        self.home = home;
        self
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the recipe home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Get the global configuration file path.
    pub fn config_path(&self) -> PathBuf {
        self.home.join("config.toml")
    }

    /// Get the project configuration file path for a project root.
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(".recipe").join("config.toml")
    }

    /// Load merged global and project configuration.
    pub fn load_config(&self, project_root: &Path) -> Result<Config> {
        load_config(&self.config_path(), &Self::project_config_path(project_root))
    }

    /// Find Recipe.toml starting from cwd and searching upward.
    pub fn find_manifest(&self) -> Result<PathBuf, ManifestError> {
        find_manifest(&self.cwd)
    }
}
