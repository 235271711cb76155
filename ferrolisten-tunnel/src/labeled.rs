//! Labeled tunnel, addressed by key/value labels instead of an address

use crate::option::EndpointOption;
use crate::replace::{replace_opt, Replacer};
use crate::tunnel::{TunnelKind, TunnelVariant};
use crate::validate::require_labels;
use ferrolisten_common::{Result, ValidationError};
use ferrolisten_directive::Directive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LabeledTunnel {
    /// Label to value, at least one entry
    pub labels: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

impl TunnelVariant for LabeledTunnel {
    const KIND: TunnelKind = TunnelKind::Labeled;

    fn apply(&mut self, d: &Directive) -> Result<()> {
        match d.name.as_str() {
            "label" | "labels" => {
                for (label, value) in d.pairs()? {
                    self.labels.insert(label.to_string(), value.to_string());
                }
            }
            "metadata" => self.metadata = Some(d.one_arg()?.to_string()),
            _ => return Err(d.unrecognized().into()),
        }
        Ok(())
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        require_labels(&self.labels)
    }

    /// Labels sorted by name, then metadata.
    fn build_options(&self) -> Vec<EndpointOption> {
        let mut opts: Vec<EndpointOption> = self
            .labels
            .iter()
            .map(|(label, value)| EndpointOption::Label {
                label: label.clone(),
                value: value.clone(),
            })
            .collect();
        if let Some(metadata) = self.metadata.as_deref().filter(|m| !m.is_empty()) {
            opts.push(EndpointOption::Metadata(metadata.to_string()));
        }
        opts
    }

    fn substitute(self, replacer: &dyn Replacer) -> Result<Self> {
        Ok(Self {
            metadata: replace_opt(self.metadata.as_deref(), replacer)?,
            ..self
        })
    }
}
