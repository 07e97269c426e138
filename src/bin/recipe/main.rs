//! Recipe CLI - build configuration for the reinforce library

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use recipe::core::manifest::ManifestError;
use recipe::util::diagnostic::{emit, suggestions, Diagnostic};
use recipe::ConfigError;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    if let Err(e) = run(cli) {
        report(&e, color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("recipe=debug")
    } else {
        EnvFilter::new("recipe=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Options(args) => commands::options::execute(args),
        Commands::Requirements(args) => commands::requirements::execute(args),
        Commands::Toolchain(args) => commands::toolchain::execute(args),
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Print an error, upgrading known failures to a full diagnostic.
fn report(err: &anyhow::Error, color: bool) {
    if let Some(config_err) = err.downcast_ref::<ConfigError>() {
        let mut diag = config_err.to_diagnostic();
        if matches!(
            config_err,
            ConfigError::UnknownToggle { .. } | ConfigError::InvalidToggleValue { .. }
        ) {
            diag = diag.with_suggestion(suggestions::LIST_OPTIONS);
        }
        emit(&diag, color);
        return;
    }

    if let Some(ManifestError::NotFound { .. }) = err.downcast_ref::<ManifestError>() {
        let diag = Diagnostic::error(format!("{:#}", err)).with_suggestion(suggestions::NO_MANIFEST);
        emit(&diag, color);
        return;
    }

    eprintln!("error: {:#}", err);
}
