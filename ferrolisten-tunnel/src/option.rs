//! Endpoint option definitions
//!
//! An [`EndpointOption`] is one unit of configuration handed to the tunnel
//! provider client. Variants build them in a fixed order; see
//! [`Tunnel::build_options`](crate::Tunnel::build_options).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream scheme of an HTTP tunnel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Only the exact strings `http` and `https` name a scheme.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "http" => Some(Scheme::Http),
            "https" => Some(Scheme::Https),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// Endpoint option passed to the tunnel provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "option", content = "value", rename_all = "snake_case")]
pub enum EndpointOption {
    // Identity / addressing
    Domain(String),
    RemoteAddr(String),
    Label { label: String, value: String },

    Metadata(String),

    // Source filtering, one batched option per list
    AllowCidr(Vec<String>),
    DenyCidr(Vec<String>),

    // HTTP behaviour
    CircuitBreaker(f64),
    Compression,
    Scheme(Scheme),
    WebsocketTcpConversion,
    BasicAuth { username: String, password: String },

    // Header rewriting
    RequestHeader { name: String, value: String },
    RemoveRequestHeader(String),
    ResponseHeader { name: String, value: String },
    RemoveResponseHeader(String),
}

impl fmt::Display for EndpointOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointOption::Domain(domain) => write!(f, "domain {domain}"),
            EndpointOption::RemoteAddr(addr) => write!(f, "remote_addr {addr}"),
            EndpointOption::Label { label, value } => write!(f, "label {label}={value}"),
            EndpointOption::Metadata(metadata) => write!(f, "metadata {metadata:?}"),
            EndpointOption::AllowCidr(cidrs) => write!(f, "allow_cidr {}", cidrs.join(",")),
            EndpointOption::DenyCidr(cidrs) => write!(f, "deny_cidr {}", cidrs.join(",")),
            EndpointOption::CircuitBreaker(ratio) => write!(f, "circuit_breaker {ratio}"),
            EndpointOption::Compression => f.write_str("compression"),
            EndpointOption::Scheme(scheme) => write!(f, "scheme {}", scheme.as_str()),
            EndpointOption::WebsocketTcpConversion => f.write_str("websocket_tcp_conversion"),
            // Never print the password itself.
            EndpointOption::BasicAuth { username, .. } => write!(f, "basic_auth {username} ****"),
            EndpointOption::RequestHeader { name, value } => {
                write!(f, "request_header add {name} {value:?}")
            }
            EndpointOption::RemoveRequestHeader(name) => write!(f, "request_header remove {name}"),
            EndpointOption::ResponseHeader { name, value } => {
                write!(f, "response_header add {name} {value:?}")
            }
            EndpointOption::RemoveResponseHeader(name) => {
                write!(f, "response_header remove {name}")
            }
        }
    }
}
