//! Toolchain variables for the CMake build of the reinforce library.
//!
//! The emitter turns option values and the recipe's fixed build policy into
//! a flat `NAME -> value` map. Option-controlled variables are rendered as
//! `ON`/`OFF` switch tokens; policy values are passed through unchanged.
//! Whether CMake actually knows a variable is not checked here.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::Serialize;

use crate::core::errors::ConfigError;
use crate::core::options::{OptionRegistry, WITH_FAST_MATH, WITH_PYMODULE, WITH_TBB, WITH_TESTING};

/// Token for an enabled switch.
pub const ENABLED_TOKEN: &str = "ON";

/// Token for a disabled switch.
pub const DISABLED_TOKEN: &str = "OFF";

/// Variables controlled by an option: (semantic name, option).
pub const OPTION_VARIABLES: &[(&str, &str)] = &[
    ("enable_build_python_extension", WITH_PYMODULE),
    ("enable_fast_math", WITH_FAST_MATH),
    ("enable_testing", WITH_TESTING),
    ("use_tbb", WITH_TBB),
];

/// Fixed build policy. Not configurable through options.
pub const POLICY_VARIABLES: &[(&str, Literal)] = &[
    ("enable_build_docs", Literal::Bool(false)),
    ("enable_build_benchmark", Literal::Bool(false)),
    ("enable_build_with_time_trace", Literal::Bool(false)),
    ("enable_cache", Literal::Bool(false)),
    ("enable_clang_tidy", Literal::Bool(false)),
    ("enable_coverage", Literal::Bool(false)),
    ("enable_cppcheck", Literal::Bool(false)),
    ("enable_include_what_you_use", Literal::Bool(false)),
    ("enable_ipo", Literal::Bool(false)),
    ("enable_pch", Literal::Bool(false)),
    ("enable_sanitizer_address", Literal::Bool(false)),
    ("enable_sanitizer_leak", Literal::Bool(false)),
    ("enable_sanitizer_memory", Literal::Bool(false)),
    ("enable_sanitizer_thread", Literal::Bool(false)),
    ("enable_sanitizer_undefined_behavior", Literal::Bool(false)),
    ("enable_warning_padding", Literal::Bool(false)),
    ("use_pybind11_findpython", Literal::Bool(true)),
    ("install_pymodule", Literal::Bool(false)),
    ("warnings_as_errors", Literal::Bool(false)),
];

/// An `ON`/`OFF` switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Switch {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl Switch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Switch::On => ENABLED_TOKEN,
            Switch::Off => DISABLED_TOKEN,
        }
    }
}

impl From<bool> for Switch {
    fn from(enabled: bool) -> Self {
        if enabled {
            Switch::On
        } else {
            Switch::Off
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A policy value copied verbatim into the toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Str(&'static str),
}

/// Value of a toolchain variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ToolchainValue {
    /// Rendered from an option
    Switch(Switch),
    /// Passed through from the build policy
    Literal(Literal),
}

impl ToolchainValue {
    /// The value as it appears on a CMake command line.
    pub fn to_cmake(&self) -> String {
        match self {
            ToolchainValue::Switch(s) => s.as_str().to_string(),
            ToolchainValue::Literal(Literal::Bool(b)) => Switch::from(*b).as_str().to_string(),
            ToolchainValue::Literal(Literal::Str(s)) => s.to_string(),
        }
    }

    /// CMake cache type used when the variable is written to a toolchain file.
    pub fn cache_type(&self) -> &'static str {
        match self {
            ToolchainValue::Literal(Literal::Bool(_)) => "BOOL",
            _ => "STRING",
        }
    }
}

impl fmt::Display for ToolchainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolchainValue::Switch(s) => write!(f, "\"{}\"", s),
            ToolchainValue::Literal(Literal::Bool(b)) => write!(f, "{}", b),
            ToolchainValue::Literal(Literal::Str(s)) => write!(f, "\"{}\"", s),
        }
    }
}

/// Normalize a semantic variable name to its toolchain spelling.
pub fn variable_name(semantic: &str) -> String {
    semantic.to_ascii_uppercase()
}

/// Toolchain variables handed to the build-file generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolchainVariableMap {
    vars: BTreeMap<String, ToolchainValue>,

    /// Semantic name each variable was inserted under
    #[serde(skip)]
    sources: BTreeMap<String, String>,
}

impl ToolchainVariableMap {
    pub fn new() -> Self {
        ToolchainVariableMap::default()
    }

    /// Insert a variable under its normalized name.
    ///
    /// Fails if another entry already normalized to the same name.
    pub fn insert(&mut self, semantic: &str, value: ToolchainValue) -> Result<(), ConfigError> {
        let name = variable_name(semantic);

        if let Some(first) = self.sources.get(&name) {
            return Err(ConfigError::NameCollision {
                variable: name,
                first: first.clone(),
                second: semantic.to_string(),
            });
        }

        self.sources.insert(name.clone(), semantic.to_string());
        self.vars.insert(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ToolchainValue> {
        self.vars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Variables sorted by name.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ToolchainValue> {
        self.vars.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// `-DNAME=VALUE` arguments for `cmake -S ... -B ...`.
    pub fn to_cmake_args(&self) -> Vec<String> {
        self.vars
            .iter()
            .map(|(name, value)| format!("-D{}={}", name, value.to_cmake()))
            .collect()
    }

    /// Render the variables as CMake cache entries.
    pub fn render_cmake(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.vars {
            let rendered = match value {
                ToolchainValue::Literal(Literal::Bool(_)) => value.to_cmake(),
                _ => format!("\"{}\"", value.to_cmake()),
            };
            out.push_str(&format!(
                "set({} {} CACHE {} \"Variable {} defined by recipe toolchain\" FORCE)\n",
                name,
                rendered,
                value.cache_type(),
                name
            ));
        }
        out
    }
}

impl<'a> IntoIterator for &'a ToolchainVariableMap {
    type Item = (&'a String, &'a ToolchainValue);
    type IntoIter = btree_map::Iter<'a, String, ToolchainValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

/// Emit the recipe's toolchain variables for the given option values.
pub fn emit_variables(options: &OptionRegistry) -> Result<ToolchainVariableMap, ConfigError> {
    emit_with_tables(options, OPTION_VARIABLES, POLICY_VARIABLES)
}

/// Emit variables from explicit option and policy tables.
pub fn emit_with_tables(
    options: &OptionRegistry,
    option_vars: &[(&str, &str)],
    policy_vars: &[(&str, Literal)],
) -> Result<ToolchainVariableMap, ConfigError> {
    let mut map = ToolchainVariableMap::new();

    for (semantic, option) in option_vars {
        let switch = Switch::from(options.value(option)?);
        tracing::debug!("{} = {} (from {})", variable_name(semantic), switch, option);
        map.insert(semantic, ToolchainValue::Switch(switch))?;
    }

    for (semantic, literal) in policy_vars {
        map.insert(semantic, ToolchainValue::Literal(*literal))?;
    }

    Ok(map)
}
