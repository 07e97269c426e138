//! Test fixtures for common test scenarios.
//!
//! Pre-built manifests, requirement lists and option assignments shared by
//! the unit tests.

use std::path::{Path, PathBuf};

use crate::core::dependency::DependencySpec;
use crate::core::manifest::MANIFEST_NAME;
use crate::core::options::{OptionOverrides, WITH_FAST_MATH, WITH_PYMODULE, WITH_TBB, WITH_TESTING};

/// The options of the reinforce recipe, in declaration order.
pub const ALL_OPTIONS: [&str; 4] = [WITH_TBB, WITH_PYMODULE, WITH_FAST_MATH, WITH_TESTING];

/// Fixture for a recipe project on disk.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    /// Project directory name.
    pub name: String,
    /// Recipe.toml content.
    pub manifest: String,
    /// Project config (.recipe/config.toml), if any.
    pub config: Option<String>,
}

impl ProjectFixture {
    /// Create a project with the sample reinforce manifest.
    pub fn reinforce() -> Self {
        ProjectFixture {
            name: "reinforce".to_string(),
            manifest: manifests::reinforce(),
            config: None,
        }
    }

    /// Replace the manifest content.
    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self
    }

    /// Add a project config file.
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Write this fixture to a real directory.
    pub fn write_to(&self, base_path: &Path) -> std::io::Result<PathBuf> {
        let project_path = base_path.join(&self.name);
        std::fs::create_dir_all(&project_path)?;

        std::fs::write(project_path.join(MANIFEST_NAME), &self.manifest)?;

        if let Some(ref config) = self.config {
            let dir = project_path.join(".recipe");
            std::fs::create_dir_all(&dir)?;
            std::fs::write(dir.join("config.toml"), config)?;
        }

        Ok(project_path)
    }
}

/// Common manifest templates.
pub mod manifests {
    /// The reinforce library manifest with its usual base requirements.
    pub fn reinforce() -> String {
        r#"[package]
name = "reinforce"
version = "0.0.1.dev"
package-type = "static-library"

[requirements]
requires = [
    "xtensor/0.24.7",
    "fmt/10.2.1",
    "range-v3/0.12.0",
]
"#
        .to_string()
    }

    /// A manifest without base requirements.
    pub fn bare(name: &str) -> String {
        format!(
            r#"[package]
name = "{name}"
version = "1.0.0"
"#
        )
    }
}

/// Base requirements matching [`manifests::reinforce`].
pub fn base_requirements() -> Vec<DependencySpec> {
    ["xtensor/0.24.7", "fmt/10.2.1", "range-v3/0.12.0"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect()
}

/// Every assignment of the four recipe options, each set explicitly.
pub fn option_power_set() -> Vec<OptionOverrides> {
    (0..1u32 << ALL_OPTIONS.len())
        .map(|bits| {
            let mut overrides = OptionOverrides::new();
            for (i, name) in ALL_OPTIONS.iter().enumerate() {
                overrides.set(*name, bits & (1 << i) != 0);
            }
            overrides
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_set_is_complete() {
        let all = option_power_set();
        assert_eq!(all.len(), 16);

        let mut seen = std::collections::HashSet::new();
        for overrides in &all {
            let key: Vec<bool> = ALL_OPTIONS
                .iter()
                .map(|n| overrides.get(n).unwrap())
                .collect();
            assert!(seen.insert(key));
        }
    }

    #[test]
    fn test_fixture_write() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = ProjectFixture::reinforce()
            .with_config("[options]\nwith_tbb = true\n")
            .write_to(tmp.path())
            .unwrap();

        assert!(path.join(MANIFEST_NAME).exists());
        assert!(path.join(".recipe/config.toml").exists());
    }
}
