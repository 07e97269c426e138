//! Static requirement rules of the reinforce recipe.

use crate::core::options::{WITH_PYMODULE, WITH_TBB};

/// A requirement that is added only when an option is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalRequirement {
    /// Gating option
    pub option: &'static str,

    /// Requirement appended when the option is true
    pub requirement: &'static str,
}

/// Conditional requirements, in the order they are appended.
pub const CONDITIONAL_REQUIREMENTS: &[ConditionalRequirement] = &[
    ConditionalRequirement {
        option: WITH_TBB,
        requirement: "onetbb/2021.10.0",
    },
    ConditionalRequirement {
        option: WITH_PYMODULE,
        requirement: "pybind11/2.12.0",
    },
];

/// Requirements of the test suite. Always declared.
pub const TEST_REQUIREMENTS: &[&str] = &["gtest/[>=1.13.0]"];
