//! `recipe generate` command

use anyhow::Result;

use crate::cli::GenerateArgs;
use recipe::ops::{generate, GenerateOptions};
use recipe::util::GlobalContext;

pub fn execute(args: GenerateArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let opts = GenerateOptions {
        configure: args.config.to_configure_options(),
        output_dir: args.output_dir,
    };

    let result = generate(&ctx, &opts)?;

    eprintln!("      Wrote {}", result.toolchain_file.display());
    eprintln!("      Wrote {}", result.requirements_file.display());
    eprintln!("Fingerprint {}", result.configuration.fingerprint);

    Ok(())
}
