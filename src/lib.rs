//! Recipe - build configuration for the reinforce library
//!
//! This crate translates the recipe's feature options into the requirement
//! list handed to the dependency resolver and the toolchain variables handed
//! to CMake.

pub mod builder;
pub mod core;
pub mod ops;
pub mod resolver;
pub mod util;

/// Test fixtures for recipe unit tests.
///
/// This module is only available when compiling with `--cfg test`.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    dependency::DependencySpec, dependency::RequirementSet, errors::ConfigError,
    manifest::Manifest, options::OptionRegistry,
};

pub use builder::toolchain::ToolchainVariableMap;
pub use util::context::GlobalContext;
