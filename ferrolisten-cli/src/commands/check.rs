//! Check subcommand implementation

use anyhow::{Context, Result};
use clap::Args;
use ferrolisten::provision;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration file (`.json` for the structured form)
    file: PathBuf,

    /// Fail when an `{env.NAME}` placeholder names an unset variable
    #[arg(long, env = "FERROLISTEN_STRICT_ENV")]
    strict_env: bool,
}

pub fn run(args: &CheckArgs) -> Result<()> {
    let config = super::load(&args.file)?;
    let plan = provision(&config, &super::replacer(args.strict_env))
        .with_context(|| format!("invalid configuration in {}", args.file.display()))?;

    info!(file = %args.file.display(), kind = %plan.kind, "Configuration is valid");
    println!("ok: {} tunnel", plan.kind);
    Ok(())
}
