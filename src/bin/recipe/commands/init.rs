//! `recipe init` command

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::InitArgs;
use recipe::ops::init_project;
use recipe::util::GlobalContext;

/// Determines the package name from the arguments or directory.
pub fn determine_package_name(name: &Option<String>, path: &Path) -> String {
    name.clone().unwrap_or_else(|| {
        path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unnamed")
            .to_string()
    })
}

pub fn execute(args: InitArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let path = args.path.unwrap_or_else(|| PathBuf::from("."));
    let path = if path.is_absolute() {
        path
    } else {
        ctx.cwd().join(path)
    };

    let name = determine_package_name(&args.name, &path);

    init_project(&path, &name)?;

    eprintln!("     Initialized `{}` recipe", name);

    Ok(())
}
