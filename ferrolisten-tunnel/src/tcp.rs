//! TCP tunnel

use crate::option::EndpointOption;
use crate::replace::{replace_all, replace_opt, Replacer};
use crate::tunnel::{append_values, cidr_options, TunnelKind, TunnelVariant};
use crate::validate::cidr_list;
use ferrolisten_common::{Result, ValidationError};
use ferrolisten_directive::Directive;
use serde::{Deserialize, Serialize};

/// Raw TCP endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TcpTunnel {
    /// Remote address to request for this endpoint, e.g. `1.tcp.ngrok.io:12345`
    #[serde(alias = "remote_address", skip_serializing_if = "Option::is_none")]
    pub remote_addr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    #[serde(deserialize_with = "cidr_list")]
    pub allow: Vec<String>,

    #[serde(deserialize_with = "cidr_list")]
    pub deny: Vec<String>,
}

impl TunnelVariant for TcpTunnel {
    const KIND: TunnelKind = TunnelKind::Tcp;

    fn apply(&mut self, d: &Directive) -> Result<()> {
        match d.name.as_str() {
            "remote_addr" | "remote_address" => {
                self.remote_addr = Some(d.one_arg()?.to_string());
            }
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
        if let Some(addr) = self.remote_addr.as_deref().filter(|a| !a.is_empty()) {
            opts.push(EndpointOption::RemoteAddr(addr.to_string()));
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
