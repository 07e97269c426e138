//! `recipe requirements` command

use anyhow::Result;

use crate::cli::RequirementsArgs;
use recipe::ops::configure_project;
use recipe::util::GlobalContext;
use recipe::RequirementSet;

/// Render requirements in declaration order, tagged with their kind.
pub fn format_requirements(requirements: &RequirementSet) -> String {
    requirements
        .iter()
        .map(|(kind, dep)| format!("{:13} {}\n", kind.to_string(), dep))
        .collect()
}

pub fn execute(args: RequirementsArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let (_, configuration) = configure_project(&ctx, &args.config.to_configure_options())?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&configuration.requirements)?
        );
    } else {
        print!("{}", format_requirements(&configuration.requirements));
    }

    Ok(())
}
