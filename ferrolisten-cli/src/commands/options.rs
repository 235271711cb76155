//! Options subcommand implementation

use anyhow::{Context, Result};
use clap::Args;
use ferrolisten::{establish, DryRunConnector};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Configuration file (`.json` for the structured form)
    file: PathBuf,

    /// Print the plan as JSON instead of one option per line
    #[arg(long)]
    json: bool,

    /// Fail when an `{env.NAME}` placeholder names an unset variable
    #[arg(long, env = "FERROLISTEN_STRICT_ENV")]
    strict_env: bool,
}

pub fn run(args: &OptionsArgs) -> Result<()> {
    let config = super::load(&args.file)?;
    let plan = establish(&config, &super::replacer(args.strict_env), &DryRunConnector)
        .with_context(|| format!("invalid configuration in {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("session:");
    for opt in &plan.session {
        println!("  {opt}");
    }
    println!("{} tunnel:", plan.kind);
    for opt in &plan.tunnel {
        println!("  {opt}");
    }
    Ok(())
}
