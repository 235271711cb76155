use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, one event per line
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Initialization options for logging
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Filter directives (`info`, `ferrolisten=debug`, ...). Falls back to
    /// `RUST_LOG`, then to `info`.
    pub filter: Option<String>,
}

impl LoggingConfig {
    fn env_filter(&self) -> Result<EnvFilter, anyhow::Error> {
        match self.filter.as_deref() {
            Some(directives) => Ok(EnvFilter::try_new(directives)?),
            // Default to "info"; RUST_LOG=debug shows tunnel resolution.
            None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
        }
    }
}

/// Install the global subscriber.
///
/// Fails on an invalid filter or when a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), anyhow::Error> {
    let env_filter = config.env_filter()?;

    match config.format {
        LogFormat::Text => Registry::default()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()?,
        LogFormat::Json => Registry::default()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?,
    }

    tracing::debug!(format = ?config.format, "Logging initialized");
    Ok(())
}
