//! Downstream build-file generation.
//!
//! This module produces the toolchain variables and the CMake toolchain file
//! consumed by the library's CMake build.

pub mod cmake;
pub mod toolchain;

pub use cmake::{is_cmake_project, CMakeToolchainFile, TOOLCHAIN_FILE_NAME};
pub use toolchain::{
    emit_variables, Literal, Switch, ToolchainValue, ToolchainVariableMap, DISABLED_TOKEN,
    ENABLED_TOKEN,
};
