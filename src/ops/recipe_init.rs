//! Implementation of `recipe init`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::manifest::{generate_manifest, MANIFEST_NAME};

/// Validate a package name for common issues.
pub fn validate_package_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("package name cannot be empty");
    }

    if name.starts_with('-') || name.starts_with('_') || name.starts_with('.') {
        return Err("package name cannot start with a hyphen, underscore or dot");
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err("package name contains invalid characters");
    }

    Ok(())
}

/// Write a template Recipe.toml into `path`.
pub fn init_project(path: &Path, name: &str) -> Result<()> {
    if let Err(reason) = validate_package_name(name) {
        bail!("invalid package name `{}`: {}", name, reason);
    }

    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }

    let manifest_path = path.join(MANIFEST_NAME);
    if manifest_path.exists() {
        bail!("`{}` already exists in `{}`", MANIFEST_NAME, path.display());
    }

    fs::write(&manifest_path, generate_manifest(name))
        .with_context(|| format!("failed to write {}", MANIFEST_NAME))?;

    let gitignore = path.join(".gitignore");
    if !gitignore.exists() {
        fs::write(&gitignore, "# recipe outputs\nbuild/\n")
            .with_context(|| "failed to write .gitignore")?;
    }

    Ok(())
}
