//! Implementation of `recipe generate`.
//!
//! Runs the configuration pass and writes its two outputs: the CMake
//! toolchain file and `requirements.json` for the dependency resolver.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::builder::cmake::{is_cmake_project, CMakeToolchainFile, TOOLCHAIN_FILE_NAME};
use crate::ops::configure::{configure_project, Configuration, ConfigureOptions};
use crate::util::fs::{commit_staged, ensure_dir, stage_file};
use crate::util::GlobalContext;

/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "build/generators";

/// File name of the requirement lock handed to the dependency resolver.
pub const REQUIREMENTS_FILE_NAME: &str = "requirements.json";

/// Options for `recipe generate`.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub configure: ConfigureOptions,

    /// Output directory (overrides config)
    pub output_dir: Option<PathBuf>,
}

/// Files written by a generate run.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub configuration: Configuration,
    pub toolchain_file: PathBuf,
    pub requirements_file: PathBuf,
}

/// Configure the project and write the generator outputs.
pub fn generate(ctx: &GlobalContext, opts: &GenerateOptions) -> Result<GenerateResult> {
    let (project, configuration) = configure_project(ctx, &opts.configure)?;

    if !is_cmake_project(project.root()) {
        tracing::warn!(
            "no CMakeLists.txt in {}; the toolchain file will have no consumer there",
            project.root().display()
        );
    }

    let output_dir = resolve_output_dir(
        project.root(),
        opts.output_dir.as_deref(),
        project.config.generate.output_dir.as_deref(),
    );

    let (toolchain_file, requirements_file) = write_outputs(&configuration, &output_dir)?;

    tracing::info!(
        "Generated {} for {} {}",
        output_dir.display(),
        configuration.package,
        configuration.version
    );

    Ok(GenerateResult {
        configuration,
        toolchain_file,
        requirements_file,
    })
}

/// Pick the output directory: command line, then config, then default.
pub fn resolve_output_dir(root: &Path, cli: Option<&Path>, config: Option<&Path>) -> PathBuf {
    let dir = cli
        .or(config)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    if dir.is_absolute() {
        dir
    } else {
        root.join(dir)
    }
}

/// Write both outputs of a finished configuration into `dir`.
///
/// Both files are rendered and staged first, then renamed into place. If
/// either cannot be written, neither output from this run is left behind.
pub fn write_outputs(configuration: &Configuration, dir: &Path) -> Result<(PathBuf, PathBuf)> {
    ensure_dir(dir)?;

    let requirements = serde_json::to_string_pretty(&configuration.requirements)
        .context("failed to serialize requirements")?;
    let toolchain = CMakeToolchainFile::new(&configuration.package, &configuration.variables)
        .fingerprint(&configuration.fingerprint)
        .render();

    let toolchain_file = dir.join(TOOLCHAIN_FILE_NAME);
    let requirements_file = dir.join(REQUIREMENTS_FILE_NAME);

    let staged = vec![
        (stage_file(dir, &toolchain)?, toolchain_file.clone()),
        (
            stage_file(dir, &format!("{}\n", requirements))?,
            requirements_file.clone(),
        ),
    ];
    commit_staged(staged)?;

    Ok((toolchain_file, requirements_file))
}
