//! The configuration pass.
//!
//! One pass takes the manifest and the option overrides and produces the
//! requirement set and the toolchain variables together. Either both are
//! produced or the pass fails; nothing is written here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::builder::toolchain::{emit_variables, ToolchainVariableMap};
use crate::core::dependency::RequirementSet;
use crate::core::errors::ConfigError;
use crate::core::manifest::Manifest;
use crate::core::options::{OptionOverrides, OptionRegistry};
use crate::resolver::resolve_requirements;
use crate::util::hash::Fingerprint;
use crate::util::{Config, GlobalContext};

/// Result of a configuration pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Package name
    pub package: String,

    /// Package version
    pub version: String,

    /// Final option values
    #[serde(serialize_with = "serialize_toggles")]
    pub options: OptionRegistry,

    /// Requirements for the dependency resolver
    pub requirements: RequirementSet,

    /// Variables for the build-file generator
    pub variables: ToolchainVariableMap,

    /// Digest of everything above
    pub fingerprint: String,
}

fn serialize_toggles<S: serde::Serializer>(
    options: &OptionRegistry,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(options.toggles())
}

/// Run the configuration pass for a manifest.
pub fn configure(
    manifest: &Manifest,
    overrides: &OptionOverrides,
) -> Result<Configuration, ConfigError> {
    let options = OptionRegistry::reinforce()?.with_overrides(overrides)?;

    let requirements = resolve_requirements(&manifest.requirements, &options)?;
    let variables = emit_variables(&options)?;

    let fingerprint = fingerprint(manifest, &options, &requirements, &variables);

    tracing::debug!(
        "configured {} {} ({} requirements, {} variables)",
        manifest.name(),
        manifest.version(),
        requirements.requires().len(),
        variables.len()
    );

    Ok(Configuration {
        package: manifest.name().to_string(),
        version: manifest.version().to_string(),
        options,
        requirements,
        variables,
        fingerprint,
    })
}

fn fingerprint(
    manifest: &Manifest,
    options: &OptionRegistry,
    requirements: &RequirementSet,
    variables: &ToolchainVariableMap,
) -> String {
    let mut fp = Fingerprint::new();
    fp.update_str(manifest.name()).update_str(manifest.version());

    for toggle in options.toggles() {
        fp.update_str(&toggle.name).update_bool(toggle.value());
    }
    for (kind, dep) in requirements.iter() {
        fp.update_str(&kind.to_string()).update_str(&dep.to_string());
    }
    fp.update_strs(variables.to_cmake_args().iter().map(String::as_str));

    fp.finish()
}

/// Options for a configuration pass run from the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigureOptions {
    /// Explicit manifest path (otherwise searched from cwd)
    pub manifest_path: Option<PathBuf>,

    /// `-o name=value` assignments, highest precedence
    pub overrides: Vec<String>,
}

/// A loaded project: manifest plus merged configuration.
#[derive(Debug, Clone)]
pub struct Project {
    pub manifest: Manifest,
    pub manifest_path: PathBuf,
    pub config: Config,
    pub overrides: OptionOverrides,
}

impl Project {
    /// Directory containing Recipe.toml.
    pub fn root(&self) -> &Path {
        &self.manifest.manifest_dir
    }
}

/// Locate and load the manifest and collect overrides from every source.
pub fn load_project(ctx: &GlobalContext, opts: &ConfigureOptions) -> Result<Project> {
    let manifest_path = match opts.manifest_path {
        Some(ref path) if path.is_absolute() => path.clone(),
        Some(ref path) => ctx.cwd().join(path),
        None => ctx.find_manifest()?,
    };

    let manifest = Manifest::load(&manifest_path)?;
    let config = ctx.load_config(&manifest.manifest_dir)?;

    let mut overrides = config.options.clone();
    let mut cli = OptionOverrides::new();
    for assignment in &opts.overrides {
        cli.parse_assignment(assignment)
            .with_context(|| format!("invalid option override `{}`", assignment))?;
    }
    overrides.merge(&cli);

    Ok(Project {
        manifest,
        manifest_path,
        config,
        overrides,
    })
}

/// Load the project and run the configuration pass.
pub fn configure_project(ctx: &GlobalContext, opts: &ConfigureOptions) -> Result<(Project, Configuration)> {
    let project = load_project(ctx, opts)?;
    let configuration = configure(&project.manifest, &project.overrides)?;
    Ok((project, configuration))
}
