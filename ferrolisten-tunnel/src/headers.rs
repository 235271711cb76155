//! Request/response header rewrite rules for HTTP tunnels
//!
//! ```text
//! request_header add X-Forwarded-By edge
//! request_header remove Cookie X-Debug
//! response_header {
//!     add Strict-Transport-Security "max-age=31536000"
//!     remove Server
//! }
//! ```

use crate::option::EndpointOption;
use crate::replace::Replacer;
use ferrolisten_common::Result;
use ferrolisten_directive::Directive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which side of the exchange a rule set rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTarget {
    Request,
    Response,
}

/// Independent add and remove rules
///
/// A name may appear in both sets. The provider applies removals before
/// additions, so such a header ends up present with the added value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderRules {
    /// Header name to value; a repeated name keeps the last value
    pub added: BTreeMap<String, String>,
    /// Header names in declaration order
    pub removed: Vec<String>,
}

impl HeaderRules {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Apply one `request_header`/`response_header` directive, inline or block form.
    pub fn unmarshal(&mut self, d: &Directive) -> Result<()> {
        match (&d.block, d.args.split_first()) {
            (None, Some((op, rest))) => self.apply(d, op, rest),
            (Some(lines), None) if !lines.is_empty() => lines
                .iter()
                .try_for_each(|line| {
                    if line.block.is_some() {
                        return Err(line.arg_err().into());
                    }
                    self.apply(line, &line.name, &line.args)
                }),
            _ => Err(d.arg_err().into()),
        }
    }

    fn apply(&mut self, at: &Directive, op: &str, args: &[String]) -> Result<()> {
        match (op, args) {
            ("add", [name, value]) => {
                self.added.insert(name.clone(), value.clone());
            }
            ("remove", names) if !names.is_empty() => {
                self.removed.extend(names.iter().cloned());
            }
            ("add" | "remove", _) => return Err(at.arg_err().into()),
            _ => {
                return Err(at
                    .err(format!("unrecognized header operation '{}'", op))
                    .into())
            }
        }
        Ok(())
    }

    /// Additions sorted by name, then removals in declaration order.
    pub fn options(&self, target: HeaderTarget) -> Vec<EndpointOption> {
        let added = self.added.iter().map(|(name, value)| {
            let (name, value) = (name.clone(), value.clone());
            match target {
                HeaderTarget::Request => EndpointOption::RequestHeader { name, value },
                HeaderTarget::Response => EndpointOption::ResponseHeader { name, value },
            }
        });
        let removed = self.removed.iter().cloned().map(|name| match target {
            HeaderTarget::Request => EndpointOption::RemoveRequestHeader(name),
            HeaderTarget::Response => EndpointOption::RemoveResponseHeader(name),
        });
        added.chain(removed).collect()
    }

    /// Substitute placeholders in every added value.
    pub fn substitute(self, replacer: &dyn Replacer) -> Result<Self> {
        let added = self
            .added
            .into_iter()
            .map(|(name, value)| Ok((name, replacer.replace(&value)?)))
            .collect::<Result<_>>()?;
        Ok(Self {
            added,
            removed: self.removed,
        })
    }
}
