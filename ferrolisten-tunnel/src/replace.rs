//! Value substitution seam
//!
//! Placeholder expansion (environment variables and the like) is owned by
//! the caller. Tunnels only need "string in, substituted string out".

use ferrolisten_common::Result;

/// Substitutes placeholders in configuration values
pub trait Replacer {
    fn replace(&self, input: &str) -> Result<String>;
}

/// Leaves every value untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReplacer;

impl Replacer for NoopReplacer {
    fn replace(&self, input: &str) -> Result<String> {
        Ok(input.to_string())
    }
}

impl<F> Replacer for F
where
    F: Fn(&str) -> Result<String>,
{
    fn replace(&self, input: &str) -> Result<String> {
        self(input)
    }
}

pub(crate) fn replace_all(values: &[String], replacer: &dyn Replacer) -> Result<Vec<String>> {
    values.iter().map(|v| replacer.replace(v)).collect()
}

pub(crate) fn replace_opt(value: Option<&str>, replacer: &dyn Replacer) -> Result<Option<String>> {
    value.map(|v| replacer.replace(v)).transpose()
}
