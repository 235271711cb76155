//! HTTP tunnel
//!
//! The richest variant: besides addressing and source filtering it carries
//! traffic policy (circuit breaker, compression, websocket conversion),
//! Basic-Auth credentials and header rewrite rules.

use crate::headers::{HeaderRules, HeaderTarget};
use crate::option::{EndpointOption, Scheme};
use crate::replace::{replace_all, replace_opt, Replacer};
use crate::tunnel::{append_values, cidr_options, TunnelKind, TunnelVariant};
use crate::validate::{cidr_list, validate_basic_auth, validate_credentials};
use ferrolisten_common::{Result, ValidationError};
use ferrolisten_directive::Directive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HTTP(S) endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HttpTunnel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    #[serde(deserialize_with = "cidr_list")]
    pub allow: Vec<String>,

    #[serde(deserialize_with = "cidr_list")]
    pub deny: Vec<String>,

    /// Raw scheme value. Only `http` and `https` produce an option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Fraction of 5xx responses that trips the breaker
    #[serde(
        alias = "circuit_breaker_ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub circuit_breaker: Option<f64>,

    pub compression: bool,

    pub websocket_tcp_converter: bool,

    /// Username to password
    #[serde(alias = "basicauth", skip_serializing_if = "BTreeMap::is_empty")]
    pub basic_auth: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "HeaderRules::is_empty")]
    pub request_headers: HeaderRules,

    #[serde(skip_serializing_if = "HeaderRules::is_empty")]
    pub response_headers: HeaderRules,
}

impl HttpTunnel {
    /// The configured scheme when it names neither `http` nor `https`.
    pub fn ignored_scheme(&self) -> Option<&str> {
        self.scheme
            .as_deref()
            .filter(|s| !s.is_empty() && Scheme::parse(s).is_none())
    }

    /// A circuit breaker ratio outside `0..=1`. Such a value is still
    /// forwarded when positive.
    pub fn unusual_ratio(&self) -> Option<f64> {
        self.circuit_breaker
            .filter(|ratio| !(0.0..=1.0).contains(ratio))
    }

    fn unmarshal_basic_auth(&mut self, d: &Directive) -> Result<()> {
        for (username, password) in d.pairs()? {
            validate_basic_auth(username, password).map_err(|e| d.invalid(e))?;
            self.basic_auth
                .insert(username.to_string(), password.to_string());
        }
        Ok(())
    }
}

impl TunnelVariant for HttpTunnel {
    const KIND: TunnelKind = TunnelKind::Http;

    fn apply(&mut self, d: &Directive) -> Result<()> {
        match d.name.as_str() {
            "domain" => self.domain = Some(d.one_arg()?.to_string()),
            "metadata" => self.metadata = Some(d.one_arg()?.to_string()),
            "allow" => append_values(&mut self.allow, d)?,
            "deny" => append_values(&mut self.deny, d)?,
            "scheme" => self.scheme = Some(d.one_arg()?.to_string()),
            "circuit_breaker" | "circuit_breaker_ratio" => {
                self.circuit_breaker = Some(d.ratio()?);
            }
            "compression" => self.compression = d.flag()?,
            "websocket_tcp_converter" => self.websocket_tcp_converter = d.flag()?,
            "basic_auth" | "basicauth" => self.unmarshal_basic_auth(d)?,
            "request_header" => self.request_headers.unmarshal(d)?,
            "response_header" => self.response_headers.unmarshal(d)?,
            _ => return Err(d.unrecognized().into()),
        }
        Ok(())
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        validate_credentials(&self.basic_auth)
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

        if let Some(ratio) = self.circuit_breaker.filter(|r| *r > 0.0) {
            opts.push(EndpointOption::CircuitBreaker(ratio));
        }
        if self.compression {
            opts.push(EndpointOption::Compression);
        }
        if let Some(scheme) = self.scheme.as_deref().and_then(Scheme::parse) {
            opts.push(EndpointOption::Scheme(scheme));
        }
        if self.websocket_tcp_converter {
            opts.push(EndpointOption::WebsocketTcpConversion);
        }
        opts.extend(
            self.basic_auth
                .iter()
                .map(|(username, password)| EndpointOption::BasicAuth {
                    username: username.clone(),
                    password: password.clone(),
                }),
        );
        opts.extend(self.request_headers.options(HeaderTarget::Request));
        opts.extend(self.response_headers.options(HeaderTarget::Response));
        opts
    }

    fn substitute(self, replacer: &dyn Replacer) -> Result<Self> {
        Ok(Self {
            metadata: replace_opt(self.metadata.as_deref(), replacer)?,
            allow: replace_all(&self.allow, replacer)?,
            deny: replace_all(&self.deny, replacer)?,
            request_headers: self.request_headers.substitute(replacer)?,
            response_headers: self.response_headers.substitute(replacer)?,
            ..self
        })
    }
}
