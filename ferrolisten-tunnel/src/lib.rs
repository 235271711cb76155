//! `FerroListen` tunnel variants
//!
//! The closed set of tunnel kinds ([`TcpTunnel`], [`TlsTunnel`],
//! [`HttpTunnel`], [`LabeledTunnel`]) behind the [`Tunnel`] sum type, the
//! field validators they share, and the deterministic translation of a
//! configured tunnel into provider [`EndpointOption`]s.
//!
//! # Example
//!
//! ```rust
//! use ferrolisten_directive::parse_single;
//! use ferrolisten_tunnel::{EndpointOption, Tunnel};
//!
//! let d = parse_single("Caddyfile", "tunnel tls {\n domain foo.ngrok.io\n}").unwrap();
//! let tunnel = Tunnel::from_directive(&d).unwrap();
//! tunnel.validate().unwrap();
//! assert_eq!(
//!     tunnel.build_options(),
//!     vec![EndpointOption::Domain("foo.ngrok.io".into())]
//! );
//! ```

pub mod headers;
pub mod http;
pub mod labeled;
pub mod option;
pub mod replace;
pub mod tcp;
pub mod tls;
pub mod tunnel;
pub mod validate;

pub use headers::{HeaderRules, HeaderTarget};
pub use http::HttpTunnel;
pub use labeled::LabeledTunnel;
pub use option::{EndpointOption, Scheme};
pub use replace::{NoopReplacer, Replacer};
pub use tcp::TcpTunnel;
pub use tls::TlsTunnel;
pub use tunnel::{Tunnel, TunnelKind, TunnelVariant, UnknownTunnelKind};
