//! FerroListen CLI
//!
//! Checks tunnel listener configurations and prints the options they
//! provision.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use ferrolisten_observability::{init_logging, LogFormat, LoggingConfig};

#[derive(Parser)]
#[command(
    name = "ferrolisten",
    author,
    version,
    about = "Check and inspect declarative tunnel configurations",
    long_about = "FerroListen reads a tunnel listener configuration (directive text or JSON),\n\
                  validates it and shows the ordered options handed to the tunnel provider.",
    propagate_version = true
)]
struct Cli {
    /// Log output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = LogFormatArg::Text,
        env = "FERROLISTEN_LOG_FORMAT"
    )]
    log_format: LogFormatArg,

    /// Log filter, e.g. `info` or `ferrolisten=debug`
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a configuration file
    Check(commands::check::CheckArgs),

    /// Print the session and endpoint options a configuration provisions
    Options(commands::options::OptionsArgs),

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        format: cli.log_format.into(),
        filter: cli.log_level,
    })?;

    match cli.command {
        Commands::Check(args) => commands::check::run(&args),
        Commands::Options(args) => commands::options::run(&args),
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
