//! Requirement resolution.
//!
//! Turns the manifest's base requirements and the current option values into
//! a [`RequirementSet`]. This is pure data transformation: fetching and
//! version solving belong to the external dependency resolver.

pub mod rules;

pub use rules::{ConditionalRequirement, CONDITIONAL_REQUIREMENTS, TEST_REQUIREMENTS};

use crate::core::dependency::{DependencySpec, RequirementSet};
use crate::core::errors::ConfigError;
use crate::core::options::OptionRegistry;

/// Resolve requirements with the recipe's rule tables.
pub fn resolve_requirements(
    base: &[DependencySpec],
    options: &OptionRegistry,
) -> Result<RequirementSet, ConfigError> {
    resolve_with_rules(base, options, CONDITIONAL_REQUIREMENTS, TEST_REQUIREMENTS)
}

/// Resolve requirements against an explicit rule table.
///
/// The base list is kept as-is and in order. Each conditional requirement is
/// appended, in rule order, iff its option is enabled. Test requirements are
/// appended unconditionally to their own partition.
pub fn resolve_with_rules(
    base: &[DependencySpec],
    options: &OptionRegistry,
    rules: &[ConditionalRequirement],
    test_requirements: &[&str],
) -> Result<RequirementSet, ConfigError> {
    let mut requires = base.to_vec();

    for rule in rules {
        if !options.value(rule.option)? {
            tracing::debug!("skipping {} ({} is off)", rule.requirement, rule.option);
            continue;
        }

        let dep: DependencySpec = rule.requirement.parse()?;
        if base.iter().any(|b| b.name() == dep.name()) {
            tracing::warn!(
                "`{}` is enabled by `{}` but `{}` is already a base requirement",
                dep,
                rule.option,
                dep.name()
            );
        }

        tracing::debug!("adding {} ({} is on)", dep, rule.option);
        requires.push(dep);
    }

    let test_requires = test_requirements
        .iter()
        .map(|s| s.parse::<DependencySpec>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RequirementSet::new(requires, test_requires))
}
