//! High-level operations.
//!
//! This module contains the implementation of recipe commands.

pub mod configure;
pub mod generate;
pub mod recipe_init;

pub use configure::{
    configure, configure_project, load_project, Configuration, ConfigureOptions, Project,
};
pub use generate::{generate, GenerateOptions, GenerateResult};
pub use recipe_init::init_project;
