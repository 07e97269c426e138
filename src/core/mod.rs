//! Core data types: options, requirements, manifest and errors.

pub mod dependency;
pub mod errors;
pub mod manifest;
pub mod options;

pub use dependency::{DependencySpec, RequirementKind, RequirementSet};
pub use errors::ConfigError;
pub use manifest::Manifest;
pub use options::{OptionOverrides, OptionRegistry, Toggle};
