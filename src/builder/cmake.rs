//! CMake toolchain file output.

use std::path::Path;

use crate::builder::toolchain::ToolchainVariableMap;

/// File name of the generated toolchain.
pub const TOOLCHAIN_FILE_NAME: &str = "recipe_toolchain.cmake";

/// A toolchain file ready to be written next to the other generator outputs.
pub struct CMakeToolchainFile<'a> {
    package: String,
    fingerprint: Option<String>,
    vars: &'a ToolchainVariableMap,
}

impl<'a> CMakeToolchainFile<'a> {
    /// Create a toolchain file for a package.
    pub fn new(package: impl Into<String>, vars: &'a ToolchainVariableMap) -> Self {
        CMakeToolchainFile {
            package: package.into(),
            fingerprint: None,
            vars,
        }
    }

    /// Record the configuration fingerprint in the file header.
    pub fn fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    /// Render the file contents.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "# Generated by recipe for `{}`. Do not edit.\n",
            self.package
        ));
        if let Some(ref fp) = self.fingerprint {
            out.push_str(&format!("# fingerprint: {}\n", fp));
        }
        out.push_str("# Use with: cmake -DCMAKE_TOOLCHAIN_FILE=<this file>\n\n");
        out.push_str("include_guard()\n\n");
        out.push_str(&self.vars.render_cmake());
        out
    }
}

/// Check if a directory contains a CMake project.
pub fn is_cmake_project(dir: &Path) -> bool {
    dir.join("CMakeLists.txt").exists()
}
