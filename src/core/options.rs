//! Option registry: the recipe's boolean feature toggles.
//!
//! The registry is built once per configuration pass. Declarations come from
//! [`OptionRegistry::reinforce`], overrides from the invoking driver; the
//! effective value of a toggle is its override if one was supplied and its
//! declared default otherwise.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::ConfigError;

/// Enables the oneTBB parallelism backend.
pub const WITH_TBB: &str = "with_tbb";

/// Builds the Python extension module (pybind11).
pub const WITH_PYMODULE: &str = "with_pymodule";

/// Compiles with fast-math floating point semantics.
pub const WITH_FAST_MATH: &str = "with_fast_math";

/// Builds the test suite.
pub const WITH_TESTING: &str = "with_testing";

/// Declared options of the reinforce recipe, in declaration order.
const RECIPE_OPTIONS: &[(&str, bool)] = &[
    (WITH_TBB, false),
    (WITH_PYMODULE, false),
    (WITH_FAST_MATH, false),
    (WITH_TESTING, false),
];

/// A declared boolean toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toggle {
    /// Option name (e.g. `with_tbb`)
    pub name: String,

    /// Declared default
    pub default: bool,

    /// Externally supplied value, if any
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub override_value: Option<bool>,
}

impl Toggle {
    /// The value the rest of the pass sees.
    pub fn value(&self) -> bool {
        self.override_value.unwrap_or(self.default)
    }

    /// Whether the effective value came from an override.
    pub fn is_overridden(&self) -> bool {
        self.override_value.is_some()
    }
}

/// The set of declared toggles for one configuration pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRegistry {
    toggles: Vec<Toggle>,
}

impl OptionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        OptionRegistry {
            toggles: Vec::new(),
        }
    }

    /// Create the registry with the reinforce recipe's declared options.
    pub fn reinforce() -> Result<Self, ConfigError> {
        OptionRegistry::from_table(RECIPE_OPTIONS)
    }

    /// Create a registry from `(name, default)` declarations, in order.
    pub fn from_table(table: &[(&str, bool)]) -> Result<Self, ConfigError> {
        let mut registry = OptionRegistry::new();
        for (name, default) in table {
            registry.declare(*name, *default)?;
        }
        Ok(registry)
    }

    /// Declare a toggle with its default value.
    pub fn declare(&mut self, name: impl Into<String>, default: bool) -> Result<(), ConfigError> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(ConfigError::DuplicateToggle { name });
        }

        self.toggles.push(Toggle {
            name,
            default,
            override_value: None,
        });
        Ok(())
    }

    /// Record an externally supplied value for a declared toggle.
    pub fn set_override(&mut self, name: &str, value: bool) -> Result<(), ConfigError> {
        let known = self.names();
        match self.toggles.iter_mut().find(|t| t.name == name) {
            Some(toggle) => {
                toggle.override_value = Some(value);
                Ok(())
            }
            None => Err(ConfigError::UnknownToggle {
                name: name.to_string(),
                known,
            }),
        }
    }

    /// Apply a whole override set, consuming the registry.
    ///
    /// Fails on the first undeclared name; the partially updated registry is
    /// dropped with the error.
    pub fn with_overrides(mut self, overrides: &OptionOverrides) -> Result<Self, ConfigError> {
        for (name, value) in overrides.iter() {
            self.set_override(name, value)?;
        }
        Ok(self)
    }

    /// Effective value of a declared toggle.
    pub fn value(&self, name: &str) -> Result<bool, ConfigError> {
        self.get(name)
            .map(Toggle::value)
            .ok_or_else(|| ConfigError::UnknownToggle {
                name: name.to_string(),
                known: self.names(),
            })
    }

    /// Look up a declared toggle.
    pub fn get(&self, name: &str) -> Option<&Toggle> {
        self.toggles.iter().find(|t| t.name == name)
    }

    /// Declared toggles in declaration order.
    pub fn toggles(&self) -> impl Iterator<Item = &Toggle> {
        self.toggles.iter()
    }

    /// Declared toggle names in declaration order.
    pub fn names(&self) -> Vec<String> {
        self.toggles.iter().map(|t| t.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }
}

/// Parse a boolean option value.
///
/// Accepts the spellings users pass on command lines and in profiles:
/// `true`/`false`, `on`/`off`, `yes`/`no` and `1`/`0`, in any case.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Toggle values supplied by the driver.
///
/// Names are not checked here; that happens when the overrides are applied
/// to a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionOverrides {
    values: BTreeMap<String, bool>,
}

impl OptionOverrides {
    pub fn new() -> Self {
        OptionOverrides {
            values: BTreeMap::new(),
        }
    }

    /// Set a single override, replacing any earlier value.
    pub fn set(&mut self, name: impl Into<String>, value: bool) {
        self.values.insert(name.into(), value);
    }

    /// Builder-style [`OptionOverrides::set`].
    pub fn with(mut self, name: impl Into<String>, value: bool) -> Self {
        self.set(name, value);
        self
    }

    /// Parse a `name=value` assignment and record it.
    pub fn parse_assignment(&mut self, assignment: &str) -> Result<(), ConfigError> {
        let assignment: OptionAssignment = assignment.parse()?;
        self.set(assignment.name, assignment.value);
        Ok(())
    }

    /// Merge another override set into this one (other takes precedence).
    pub fn merge(&mut self, other: &OptionOverrides) {
        for (name, value) in other.iter() {
            self.values.insert(name.to_string(), value);
        }
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Overrides sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A single `name=value` override as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAssignment {
    pub name: String,
    pub value: bool,
}

impl FromStr for OptionAssignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, raw) = s.split_once('=').ok_or_else(|| ConfigError::InvalidToggleValue {
            name: s.trim().to_string(),
            value: String::new(),
        })?;
        let name = name.trim();

        let value = parse_bool(raw).ok_or_else(|| ConfigError::InvalidToggleValue {
            name: name.to_string(),
            value: raw.trim().to_string(),
        })?;

        Ok(OptionAssignment {
            name: name.to_string(),
            value,
        })
    }
}

impl fmt::Display for OptionAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, if self.value { "True" } else { "False" })
    }
}
