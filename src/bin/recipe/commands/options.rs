//! `recipe options` command

use anyhow::Result;

use crate::cli::OptionsArgs;
use recipe::ops::configure_project;
use recipe::util::GlobalContext;
use recipe::OptionRegistry;

/// Render one line per option: name, effective value and where it came from.
pub fn format_options(options: &OptionRegistry) -> String {
    let width = options.toggles().map(|t| t.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for toggle in options.toggles() {
        let source = if toggle.is_overridden() {
            "override"
        } else {
            "default"
        };
        out.push_str(&format!(
            "{:width$}  {:5}  ({})\n",
            toggle.name,
            if toggle.value() { "True" } else { "False" },
            source,
            width = width
        ));
    }
    out
}

pub fn execute(args: OptionsArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let (_, configuration) = configure_project(&ctx, &args.config.to_configure_options())?;

    if args.json {
        let toggles: Vec<_> = configuration.options.toggles().collect();
        println!("{}", serde_json::to_string_pretty(&toggles)?);
    } else {
        print!("{}", format_options(&configuration.options));
    }

    Ok(())
}
