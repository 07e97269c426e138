//! `recipe toolchain` command

use anyhow::Result;

use crate::cli::ToolchainArgs;
use recipe::ops::configure_project;
use recipe::util::GlobalContext;
use recipe::ToolchainVariableMap;

/// Render `NAME = VALUE` lines, one per variable.
pub fn format_variables(variables: &ToolchainVariableMap) -> String {
    let width = variables.keys().map(str::len).max().unwrap_or(0);

    variables
        .iter()
        .map(|(name, value)| format!("{:width$} = {}\n", name, value.to_cmake(), width = width))
        .collect()
}

pub fn execute(args: ToolchainArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let (_, configuration) = configure_project(&ctx, &args.config.to_configure_options())?;
    let variables = &configuration.variables;

    if args.json {
        println!("{}", serde_json::to_string_pretty(variables)?);
    } else if args.cmake_args {
        for arg in variables.to_cmake_args() {
            println!("{}", arg);
        }
    } else {
        print!("{}", format_variables(variables));
    }

    Ok(())
}
