//! Test utilities for recipe unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use recipe::test_support::{option_power_set, ProjectFixture};
//!
//! #[test]
//! fn test_example() {
//!     let tmp = tempfile::TempDir::new().unwrap();
//!     let project = ProjectFixture::reinforce().write_to(tmp.path()).unwrap();
//!     for overrides in option_power_set() {
//!         // configure `project` with `overrides`...
//!     }
//! }
//! ```

pub mod fixtures;

// Re-export fixtures for convenience
pub use fixtures::*;
