pub mod check;
pub mod options;
pub mod version;

use anyhow::{Context, Result};
use ferrolisten::{EnvReplacer, SessionConfig};
use std::path::Path;

pub(crate) fn load(path: &Path) -> Result<SessionConfig> {
    SessionConfig::load(path).with_context(|| format!("failed to load {}", path.display()))
}

pub(crate) fn replacer(strict_env: bool) -> EnvReplacer {
    EnvReplacer::new().strict(strict_env)
}
