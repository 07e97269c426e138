//! `recipe completions` command
//!
//! Generates shell completions for various shells.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};

pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(args.shell, &mut cmd, name, &mut io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use clap_complete::Shell;

    fn parse_completions_args(args: &[&str]) -> CompletionsArgs {
        #[derive(Parser)]
        struct TestCli {
            #[command(flatten)]
            completions: CompletionsArgs,
        }
        TestCli::parse_from(args).completions
    }

    #[test]
    fn test_completions_shells() {
        assert_eq!(parse_completions_args(&["test", "bash"]).shell, Shell::Bash);
        assert_eq!(parse_completions_args(&["test", "zsh"]).shell, Shell::Zsh);
        assert_eq!(parse_completions_args(&["test", "fish"]).shell, Shell::Fish);
    }

    #[test]
    fn test_completions_mention_subcommands() {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        generate(Shell::Bash, &mut cmd, "recipe", &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("requirements"));
        assert!(script.contains("toolchain"));
    }
}
