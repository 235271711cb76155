//! TLS tunnel

use crate::option::EndpointOption;
use crate::replace::{replace_all, replace_opt, Replacer};
use crate::tunnel::{append_values, cidr_options, TunnelKind, TunnelVariant};
use crate::validate::cidr_list;
use ferrolisten_common::{Result, ValidationError};
use ferrolisten_directive::Directive;
use serde::{Deserialize, Serialize};

/// TLS endpoint terminated by the local service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TlsTunnel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    #[serde(deserialize_with = "cidr_list")]
    pub allow: Vec<String>,

    #[serde(deserialize_with = "cidr_list")]
    pub deny: Vec<String>,
}

impl TunnelVariant for TlsTunnel {
    const KIND: TunnelKind = TunnelKind::Tls;

    fn apply(&mut self, d: &Directive) -> Result<()> {
        match d.name.as_str() {
            "domain" => self.domain = Some(d.one_arg()?.to_string()),
            "metadata" => self.metadata = Some(d.one_arg()?.to_string()),
            "allow" => append_values(&mut self.allow, d)?,
            "deny" => append_values(&mut self.deny, d)?,
            _ => return Err(d.unrecognized().into()),
        }
        Ok(())
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        Ok(())
    }

    fn build_options(&self) -> Vec<EndpointOption> {
        let mut opts = Vec::new();
        if let Some(domain) = self.domain.as_deref().filter(|d| !d.is_empty()) {
            opts.push(EndpointOption::Domain(domain.to_string()));
        }
        if let Some(metadata) = self.metadata.as_deref().filter(|m| !m.is_empty()) {
            opts.push(EndpointOption::Metadata(metadata.to_string()));
        }
        opts.extend(cidr_options(&self.allow, &self.deny));
        opts
    }

    fn substitute(self, replacer: &dyn Replacer) -> Result<Self> {
        Ok(Self {
            metadata: replace_opt(self.metadata.as_deref(), replacer)?,
            allow: replace_all(&self.allow, replacer)?,
            deny: replace_all(&self.deny, replacer)?,
            ..self
        })
    }
}
