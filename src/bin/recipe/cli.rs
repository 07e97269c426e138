//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use recipe::ops::ConfigureOptions;

/// Recipe - build configuration for the reinforce library
#[derive(Parser)]
#[command(name = "recipe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a Recipe.toml in a directory
    Init(InitArgs),

    /// List the declared options and their values
    Options(OptionsArgs),

    /// Show the resolved requirements
    Requirements(RequirementsArgs),

    /// Show the toolchain variables
    Toolchain(ToolchainArgs),

    /// Write the toolchain file and requirements.json
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by every command that runs the configuration pass.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Set an option, e.g. `-o with_tbb=True` (repeatable)
    #[arg(short = 'o', long = "option", value_name = "NAME=VALUE")]
    pub options: Vec<String>,

    /// Path to Recipe.toml
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn to_configure_options(&self) -> ConfigureOptions {
        ConfigureOptions {
            manifest_path: self.manifest_path.clone(),
            overrides: self.options.clone(),
        }
    }
}

#[derive(Args)]
pub struct InitArgs {
    /// Package name (defaults to directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to initialize (defaults to current directory)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct RequirementsArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ToolchainArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output as JSON
    #[arg(long, conflicts_with = "cmake_args")]
    pub json: bool,

    /// Output as `-DNAME=VALUE` arguments for cmake
    #[arg(long)]
    pub cmake_args: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Directory for the generated files (default: build/generators)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
