//! Dependency specification.
//!
//! A DependencySpec names an external package and a version constraint in
//! `name/version` form. The constraint is opaque here: `2021.10.0`,
//! `[>=1.13.0]` and `1.0@user/channel` are all passed through unchanged to
//! the dependency resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::errors::ConfigError;

/// A single requirement on an external package.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencySpec {
    /// Package name
    name: String,

    /// Version constraint (opaque)
    version: String,
}

impl DependencySpec {
    /// Create a dependency spec from its parts.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        let version = version.into();
        let spec = format!("{}/{}", name, version);

        if name.is_empty() {
            return Err(ConfigError::InvalidDependencySpec {
                spec,
                reason: "package name is empty".to_string(),
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidDependencySpec {
                spec,
                reason: "package name contains whitespace".to_string(),
            });
        }
        if version.trim().is_empty() {
            return Err(ConfigError::InvalidDependencySpec {
                spec,
                reason: "version constraint is empty".to_string(),
            });
        }

        Ok(DependencySpec { name, version })
    }

    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the version constraint.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Check if the constraint is a range (`[...]`) rather than a pinned version.
    pub fn is_range(&self) -> bool {
        self.version.starts_with('[') && self.version.ends_with(']')
    }
}

impl FromStr for DependencySpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, version) = s
            .split_once('/')
            .ok_or_else(|| ConfigError::InvalidDependencySpec {
                spec: s.to_string(),
                reason: "expected `name/version`".to_string(),
            })?;

        DependencySpec::new(name, version)
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}

impl Serialize for DependencySpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DependencySpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Which partition a requirement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    /// Linked into or shipped with the built artifact
    Build,
    /// Only needed to build and run the test suite
    Test,
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementKind::Build => write!(f, "requires"),
            RequirementKind::Test => write!(f, "test_requires"),
        }
    }
}

/// The resolved requirements of one configuration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequirementSet {
    requires: Vec<DependencySpec>,
    test_requires: Vec<DependencySpec>,
}

impl RequirementSet {
    pub(crate) fn new(requires: Vec<DependencySpec>, test_requires: Vec<DependencySpec>) -> Self {
        RequirementSet {
            requires,
            test_requires,
        }
    }

    /// Build and runtime requirements, in declaration order.
    pub fn requires(&self) -> &[DependencySpec] {
        &self.requires
    }

    /// Test-only requirements.
    pub fn test_requires(&self) -> &[DependencySpec] {
        &self.test_requires
    }

    /// All requirements tagged with their partition.
    pub fn iter(&self) -> impl Iterator<Item = (RequirementKind, &DependencySpec)> {
        self.requires
            .iter()
            .map(|d| (RequirementKind::Build, d))
            .chain(self.test_requires.iter().map(|d| (RequirementKind::Test, d)))
    }

    /// Check if a package appears in the build partition.
    pub fn requires_package(&self, name: &str) -> bool {
        self.requires.iter().any(|d| d.name() == name)
    }
}
