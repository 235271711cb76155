//! Tunnel variant contract and the closed set of tunnel kinds
//!
//! Every variant reads its own block of subdirectives, validates itself and
//! maps its fields to an ordered list of [`EndpointOption`]s. [`Tunnel`] is
//! the sum type over all of them; the `type` tag selects the variant both in
//! directive text (`tunnel http { ... }`) and in JSON (`{"type": "http"}`).

use crate::http::HttpTunnel;
use crate::labeled::LabeledTunnel;
use crate::option::EndpointOption;
use crate::replace::Replacer;
use crate::tcp::TcpTunnel;
use crate::tls::TlsTunnel;
use ferrolisten_common::{Result, ValidationError};
use ferrolisten_directive::Directive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Contract shared by all tunnel variants
pub trait TunnelVariant: Default + Sized {
    const KIND: TunnelKind;

    /// Parse a bare block directive such as `http { ... }`.
    ///
    /// The directive itself must not carry arguments.
    fn unmarshal(d: &Directive) -> Result<Self> {
        d.expect_no_args()?;
        Self::unmarshal_block(d.subdirectives())
    }

    /// Parse the subdirectives of a tunnel block. The first error aborts.
    fn unmarshal_block(block: &[Directive]) -> Result<Self> {
        let mut tunnel = Self::default();
        for d in block {
            tunnel.apply(d)?;
        }
        Ok(tunnel)
    }

    /// Apply one subdirective to the fields.
    fn apply(&mut self, d: &Directive) -> Result<()>;

    fn validate(&self) -> std::result::Result<(), ValidationError>;

    /// Deterministic, ordered endpoint options. Never performs I/O.
    fn build_options(&self) -> Vec<EndpointOption>;

    /// Run placeholder substitution over the substitutable fields.
    fn substitute(self, replacer: &dyn Replacer) -> Result<Self>;
}

/// Tunnel kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TunnelKind {
    Tcp,
    Tls,
    Http,
    Labeled,
}

struct Registration {
    kind: TunnelKind,
    name: &'static str,
    unmarshal: fn(&[Directive]) -> Result<Tunnel>,
}

static TUNNEL_KINDS: [Registration; 4] = [
    Registration {
        kind: TunnelKind::Tcp,
        name: "tcp",
        unmarshal: unmarshal_as::<TcpTunnel>,
    },
    Registration {
        kind: TunnelKind::Tls,
        name: "tls",
        unmarshal: unmarshal_as::<TlsTunnel>,
    },
    Registration {
        kind: TunnelKind::Http,
        name: "http",
        unmarshal: unmarshal_as::<HttpTunnel>,
    },
    Registration {
        kind: TunnelKind::Labeled,
        name: "labeled",
        unmarshal: unmarshal_as::<LabeledTunnel>,
    },
];

fn unmarshal_as<V>(block: &[Directive]) -> Result<Tunnel>
where
    V: TunnelVariant + Into<Tunnel>,
{
    V::unmarshal_block(block).map(Into::into)
}

impl TunnelKind {
    pub const ALL: [TunnelKind; 4] = [
        TunnelKind::Tcp,
        TunnelKind::Tls,
        TunnelKind::Http,
        TunnelKind::Labeled,
    ];

    fn registration(self) -> &'static Registration {
        match self {
            TunnelKind::Tcp => &TUNNEL_KINDS[0],
            TunnelKind::Tls => &TUNNEL_KINDS[1],
            TunnelKind::Http => &TUNNEL_KINDS[2],
            TunnelKind::Labeled => &TUNNEL_KINDS[3],
        }
    }

    pub fn as_str(self) -> &'static str {
        self.registration().name
    }
}

impl fmt::Display for TunnelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name that matches no tunnel kind
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tunnel type '{0}', expected one of: tcp, tls, http, labeled")]
pub struct UnknownTunnelKind(pub String);

impl FromStr for TunnelKind {
    type Err = UnknownTunnelKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TUNNEL_KINDS
            .iter()
            .find(|r| r.name == s)
            .map(|r| r.kind)
            .ok_or_else(|| UnknownTunnelKind(s.to_string()))
    }
}

/// One configured tunnel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Tunnel {
    Tcp(TcpTunnel),
    Tls(TlsTunnel),
    Http(HttpTunnel),
    Labeled(LabeledTunnel),
}

impl Tunnel {
    /// Parse a session-level `tunnel <type> { ... }` directive.
    pub fn from_directive(d: &Directive) -> Result<Self> {
        match d.args.as_slice() {
            [tag] => Self::resolve(tag, d),
            _ => Err(d.arg_err().into()),
        }
    }

    /// Select the variant named by `tag` and unmarshal the block of `d` into it.
    pub fn resolve(tag: &str, d: &Directive) -> Result<Self> {
        let kind: TunnelKind = tag
            .parse()
            .map_err(|e: UnknownTunnelKind| d.err(e.to_string()))?;
        debug!(kind = %kind, line = d.line, "Resolving tunnel");
        (kind.registration().unmarshal)(d.subdirectives())
    }

    pub fn kind(&self) -> TunnelKind {
        match self {
            Tunnel::Tcp(_) => TcpTunnel::KIND,
            Tunnel::Tls(_) => TlsTunnel::KIND,
            Tunnel::Http(_) => HttpTunnel::KIND,
            Tunnel::Labeled(_) => LabeledTunnel::KIND,
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        match self {
            Tunnel::Tcp(t) => t.validate(),
            Tunnel::Tls(t) => t.validate(),
            Tunnel::Http(t) => t.validate(),
            Tunnel::Labeled(t) => t.validate(),
        }
    }

    pub fn build_options(&self) -> Vec<EndpointOption> {
        match self {
            Tunnel::Tcp(t) => t.build_options(),
            Tunnel::Tls(t) => t.build_options(),
            Tunnel::Http(t) => t.build_options(),
            Tunnel::Labeled(t) => t.build_options(),
        }
    }

    pub fn substitute(self, replacer: &dyn Replacer) -> Result<Self> {
        Ok(match self {
            Tunnel::Tcp(t) => Tunnel::Tcp(t.substitute(replacer)?),
            Tunnel::Tls(t) => Tunnel::Tls(t.substitute(replacer)?),
            Tunnel::Http(t) => Tunnel::Http(t.substitute(replacer)?),
            Tunnel::Labeled(t) => Tunnel::Labeled(t.substitute(replacer)?),
        })
    }

    /// Labels of a labeled tunnel, in emission order
    pub fn labels(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Tunnel::Labeled(t) => Some(&t.labels),
            _ => None,
        }
    }

    /// A `scheme` value that produces no option, see [`HttpTunnel::ignored_scheme`]
    pub fn ignored_scheme(&self) -> Option<&str> {
        match self {
            Tunnel::Http(t) => t.ignored_scheme(),
            _ => None,
        }
    }

    /// See [`HttpTunnel::unusual_ratio`]
    pub fn unusual_ratio(&self) -> Option<f64> {
        match self {
            Tunnel::Http(t) => t.unusual_ratio(),
            _ => None,
        }
    }
}

impl From<TcpTunnel> for Tunnel {
    fn from(t: TcpTunnel) -> Self {
        Tunnel::Tcp(t)
    }
}

impl From<TlsTunnel> for Tunnel {
    fn from(t: TlsTunnel) -> Self {
        Tunnel::Tls(t)
    }
}

impl From<HttpTunnel> for Tunnel {
    fn from(t: HttpTunnel) -> Self {
        Tunnel::Http(t)
    }
}

impl From<LabeledTunnel> for Tunnel {
    fn from(t: LabeledTunnel) -> Self {
        Tunnel::Labeled(t)
    }
}

/// Append inline or block values of a repeatable list directive.
pub(crate) fn append_values(target: &mut Vec<String>, d: &Directive) -> Result<()> {
    target.extend(d.values()?.into_iter().map(str::to_string));
    Ok(())
}

/// One batched option per non-empty list, allow before deny.
pub(crate) fn cidr_options(
    allow: &[String],
    deny: &[String],
) -> impl Iterator<Item = EndpointOption> {
    let allow = (!allow.is_empty()).then(|| EndpointOption::AllowCidr(allow.to_vec()));
    let deny = (!deny.is_empty()).then(|| EndpointOption::DenyCidr(deny.to_vec()));
    allow.into_iter().chain(deny)
}
