//! Configuration error types and diagnostics.
//!
//! Every variant aborts the whole configuration pass. Nothing here is
//! recoverable: the driver surfaces the error verbatim and stops.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// Error raised while translating options into requirements and variables.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum ConfigError {
    #[error("unknown option `{name}`")]
    #[diagnostic(code(recipe::options::unknown_toggle))]
    UnknownToggle { name: String, known: Vec<String> },

    #[error("option `{name}` is declared more than once")]
    #[diagnostic(code(recipe::options::duplicate_toggle))]
    DuplicateToggle { name: String },

    #[error("`{first}` and `{second}` both map to toolchain variable `{variable}`")]
    #[diagnostic(code(recipe::toolchain::name_collision))]
    NameCollision {
        variable: String,
        first: String,
        second: String,
    },

    #[error("invalid value `{value}` for option `{name}`")]
    #[diagnostic(
        code(recipe::options::invalid_value),
        help("boolean options accept True/False, on/off or 1/0")
    )]
    InvalidToggleValue { name: String, value: String },

    #[error("invalid requirement `{spec}`: {reason}")]
    #[diagnostic(code(recipe::requirements::invalid_spec))]
    InvalidDependencySpec { spec: String, reason: String },
}

impl ConfigError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ConfigError::UnknownToggle { name, known } => {
                let mut diag = Diagnostic::error(format!("unknown option `{}`", name));

                if !known.is_empty() {
                    diag = diag.with_context(format!("declared options: {}", known.join(", ")));
                }

                diag.with_suggestion("Check the spelling of the `-o name=value` override")
                    .with_suggestion(
                        "Remove the entry from the [options] table of .recipe/config.toml",
                    )
            }

            ConfigError::DuplicateToggle { name } => {
                Diagnostic::error(format!("option `{}` is declared more than once", name))
                    .with_suggestion(format!("Keep a single declaration of `{}`", name))
            }

            ConfigError::NameCollision {
                variable,
                first,
                second,
            } => Diagnostic::error(format!(
                "toolchain variable `{}` would be emitted twice",
                variable
            ))
            .with_context(format!("`{}` normalizes to `{}`", first, variable))
            .with_context(format!("`{}` normalizes to `{}`", second, variable))
            .with_suggestion("Rename one of the variables so the upper-cased names differ"),

            ConfigError::InvalidToggleValue { name, value } => Diagnostic::error(format!(
                "invalid value `{}` for option `{}`",
                value, name
            ))
            .with_suggestion(format!("Use `{}=True` or `{}=False`", name, name)),

            ConfigError::InvalidDependencySpec { spec, reason } => {
                Diagnostic::error(format!("invalid requirement `{}`", spec))
                    .with_context(reason.clone())
                    .with_suggestion("Write requirements as `name/version`, e.g. `fmt/10.2.1`")
            }
        }
    }
}
