//! Environment placeholder substitution
//!
//! Replaces `{env.NAME}` placeholders with the value of the environment
//! variable `NAME`. Other `{...}` text is left untouched. An unknown
//! variable is either kept verbatim or, in strict mode, reported as a
//! [`ValidationError::Substitution`].

use ferrolisten_common::{Result, ValidationError, ENV_PLACEHOLDER_PREFIX};
use ferrolisten_tunnel::Replacer;

type Lookup = fn(&str) -> Option<String>;

fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Substitutes `{env.NAME}` placeholders
#[derive(Debug, Clone, Copy)]
pub struct EnvReplacer<F = Lookup> {
    lookup: F,
    strict: bool,
}

impl EnvReplacer {
    /// Look variables up in the process environment.
    pub fn new() -> Self {
        Self {
            lookup: process_env,
            strict: false,
        }
    }
}

impl Default for EnvReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> EnvReplacer<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Look variables up with a custom function instead of the process environment.
    pub fn with_lookup(lookup: F) -> Self {
        Self {
            lookup,
            strict: false,
        }
    }

    /// Fail on unknown variables instead of leaving the placeholder in place.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl<F> Replacer for EnvReplacer<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn replace(&self, input: &str) -> Result<String> {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            let Some(close) = tail.find('}') else {
                out.push_str(tail);
                return Ok(out);
            };
            let placeholder = &tail[..=close];

            match placeholder[1..close].strip_prefix(ENV_PLACEHOLDER_PREFIX) {
                Some(name) if !name.is_empty() => match (self.lookup)(name) {
                    Some(value) => out.push_str(&value),
                    None if self.strict => {
                        return Err(ValidationError::Substitution {
                            placeholder: placeholder.to_string(),
                        }
                        .into());
                    }
                    None => out.push_str(placeholder),
                },
                _ => out.push_str(placeholder),
            }
            rest = &tail[close + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }
}
