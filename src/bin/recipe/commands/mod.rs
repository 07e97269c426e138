//! Command implementations

pub mod completions;
pub mod generate;
pub mod init;
pub mod options;
pub mod requirements;
pub mod toolchain;
