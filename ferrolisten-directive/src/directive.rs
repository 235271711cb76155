//! Directive tree nodes and argument-count helpers
//!
//! Helpers fail with a [`SyntaxError`] anchored at the directive's source
//! position. The one exception is [`Directive::ratio`], whose malformed
//! numbers are a [`ValidationError::InvalidRatio`] carrying the same position.

use crate::args::parse_bool;
use ferrolisten_common::{ListenError, Result, SyntaxError, ValidationError};
use std::sync::Arc;
use std::time::Duration;

/// One named directive with positional arguments and an optional block
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: String,
    pub args: Vec<String>,
    /// `Some` when the directive opened a `{ ... }` block, even an empty one
    pub block: Option<Vec<Directive>>,
    pub file: Arc<str>,
    pub line: usize,
}

impl Directive {
    /// Build a syntax error at this directive's position.
    pub fn err(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(self.file.as_ref(), self.line, message)
    }

    pub fn arg_err(&self) -> SyntaxError {
        self.err(format!(
            "wrong argument count or unexpected line ending after '{}'",
            self.name
        ))
    }

    pub fn unrecognized(&self) -> SyntaxError {
        self.err(format!("unrecognized subdirective '{}'", self.name))
    }

    /// Attach this directive's position to a semantic failure.
    pub fn invalid(&self, source: ValidationError) -> ListenError {
        ListenError::InvalidDirective {
            file: self.file.to_string(),
            line: self.line,
            source,
        }
    }

    /// Nested subdirectives, empty when the directive has no block.
    pub fn subdirectives(&self) -> &[Directive] {
        self.block.as_deref().unwrap_or_default()
    }

    /// Block directives such as `http { ... }` must not carry arguments.
    pub fn expect_no_args(&self) -> Result<()> {
        if self.args.is_empty() {
            Ok(())
        } else {
            Err(self.arg_err().into())
        }
    }

    fn expect_no_block(&self) -> Result<()> {
        if self.block.is_some() {
            return Err(self
                .err(format!("unexpected block after '{}'", self.name))
                .into());
        }
        Ok(())
    }

    /// Exactly one argument.
    pub fn one_arg(&self) -> Result<&str> {
        self.expect_no_block()?;
        match self.args.as_slice() {
            [arg] => Ok(arg),
            _ => Err(self.arg_err().into()),
        }
    }

    /// Zero or one argument.
    pub fn optional_arg(&self) -> Result<Option<&str>> {
        self.expect_no_block()?;
        match self.args.as_slice() {
            [] => Ok(None),
            [arg] => Ok(Some(arg)),
            _ => Err(self.arg_err().into()),
        }
    }

    /// One or more arguments on the directive line.
    pub fn remaining_args(&self) -> Result<&[String]> {
        self.expect_no_block()?;
        if self.args.is_empty() {
            return Err(self.arg_err().into());
        }
        Ok(&self.args)
    }

    /// A list given inline (`allow a b`) or as a non-empty block with one
    /// or more values per line. Values keep declaration order.
    pub fn values(&self) -> Result<Vec<&str>> {
        match (&self.block, self.args.is_empty()) {
            (None, false) => Ok(self.args.iter().map(String::as_str).collect()),
            (Some(lines), true) if !lines.is_empty() => {
                let mut values = Vec::new();
                for line in lines {
                    line.expect_no_block()?;
                    values.push(line.name.as_str());
                    values.extend(line.args.iter().map(String::as_str));
                }
                Ok(values)
            }
            _ => Err(self.arg_err().into()),
        }
    }

    /// Key/value entries given inline (`label env prod`) or as a block of
    /// `key value` lines. An empty block is an arity error.
    pub fn pairs(&self) -> Result<Vec<(&str, &str)>> {
        match (&self.block, self.args.as_slice()) {
            (None, [key, value]) => Ok(vec![(key.as_str(), value.as_str())]),
            (Some(lines), []) if !lines.is_empty() => lines
                .iter()
                .map(|line| Ok((line.name.as_str(), line.one_arg()?)))
                .collect(),
            _ => Err(self.arg_err().into()),
        }
    }

    /// A flag: bare means `true`, otherwise one boolean argument.
    pub fn flag(&self) -> Result<bool> {
        match self.optional_arg()? {
            None => Ok(true),
            Some(arg) => parse_bool(arg).ok_or_else(|| {
                self.err(format!("invalid boolean '{}' for '{}'", arg, self.name))
                    .into()
            }),
        }
    }

    /// A single floating point argument.
    pub fn ratio(&self) -> Result<f64> {
        let arg = self.one_arg()?;
        match arg.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(self.invalid(ValidationError::InvalidRatio {
                value: arg.to_string(),
            })),
        }
    }

    /// A single human-readable duration argument such as `5s` or `1m30s`.
    pub fn duration(&self) -> Result<Duration> {
        let arg = self.one_arg()?;
        humantime::parse_duration(arg).map_err(|e| {
            self.err(format!("invalid duration '{}' for '{}': {}", arg, self.name, e))
                .into()
        })
    }
}
