//! Recipe.toml manifest parsing and schema.
//!
//! The manifest carries the package metadata and the base requirement list.
//! Options are not declared here; they belong to the recipe itself (see
//! [`crate::core::options`]).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::dependency::DependencySpec;

/// Manifest file name.
pub const MANIFEST_NAME: &str = "Recipe.toml";

/// Kind of artifact the recipe produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageType {
    #[default]
    StaticLibrary,
    SharedLibrary,
    Library,
    HeaderLibrary,
    Application,
}

impl PackageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::StaticLibrary => "static-library",
            PackageType::SharedLibrary => "shared-library",
            PackageType::Library => "library",
            PackageType::HeaderLibrary => "header-library",
            PackageType::Application => "application",
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package metadata from [package] section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageMetadata {
    /// Package name
    pub name: String,

    /// Package version (not required to be semver, e.g. `0.0.1.dev`)
    pub version: String,

    /// Artifact kind
    #[serde(default)]
    pub package_type: PackageType,

    /// Settings the binary depends on
    #[serde(default = "default_settings")]
    pub settings: Vec<String>,

    /// Package description
    #[serde(default)]
    pub description: Option<String>,

    /// License identifier
    #[serde(default)]
    pub license: Option<String>,
}

fn default_settings() -> Vec<String> {
    ["os", "compiler", "build_type", "arch"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Raw manifest as deserialized from TOML.
#[derive(Debug, Deserialize)]
struct RawManifest {
    package: PackageMetadata,

    #[serde(default)]
    requirements: RawRequirements,
}

/// The [requirements] section.
#[derive(Debug, Default, Deserialize)]
struct RawRequirements {
    #[serde(default)]
    requires: Vec<String>,
}

/// The parsed Recipe.toml manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Package metadata
    pub package: PackageMetadata,

    /// Base requirements, in manifest order
    pub requirements: Vec<DependencySpec>,

    /// The directory containing this manifest
    pub manifest_dir: PathBuf,
}

impl Manifest {
    /// Load a manifest from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;

        Self::parse(&contents, manifest_dir(path))
            .with_context(|| format!("failed to parse manifest: {}", path.display()))
    }

    /// Parse manifest contents.
    pub fn parse(contents: &str, manifest_dir: PathBuf) -> Result<Self> {
        let raw: RawManifest = toml::from_str(contents)?;

        if raw.package.name.trim().is_empty() {
            bail!("package name must not be empty");
        }
        if raw.package.version.trim().is_empty() {
            bail!("package version must not be empty");
        }

        let mut requirements = Vec::with_capacity(raw.requirements.requires.len());
        for (i, entry) in raw.requirements.requires.iter().enumerate() {
            let dep: DependencySpec = entry
                .parse()
                .with_context(|| format!("in `requirements.requires` entry {}", i + 1))?;
            requirements.push(dep);
        }

        Ok(Manifest {
            package: raw.package,
            requirements,
            manifest_dir,
        })
    }

    /// Package name.
    pub fn name(&self) -> &str {
        &self.package.name
    }

    /// Package version.
    pub fn version(&self) -> &str {
        &self.package.version
    }
}

/// Directory containing a manifest path; `.` for a bare file name.
fn manifest_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Errors locating a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not find `Recipe.toml` in `{}` or any parent directory", .dir.display())]
    NotFound { dir: PathBuf },
}

/// Find `Recipe.toml` in `start` or any of its ancestors.
pub fn find_manifest(start: &Path) -> Result<PathBuf, ManifestError> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(MANIFEST_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            return Err(ManifestError::NotFound {
                dir: start.to_path_buf(),
            });
        }
    }
}

/// Generate a template manifest.
pub fn generate_manifest(name: &str) -> String {
    format!(
        r#"[package]
name = "{name}"
version = "0.1.0"
package-type = "static-library"
settings = ["os", "compiler", "build_type", "arch"]

[requirements]
# Base requirements, passed to the dependency resolver in this order.
requires = []
"#
    )
}
