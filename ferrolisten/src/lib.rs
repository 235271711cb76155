//! # `FerroListen`
//!
//! Declarative tunnel listener configuration.
//!
//! ## Overview
//!
//! `FerroListen` reads a block-structured configuration (or its JSON
//! equivalent) describing one outbound tunnel, validates it, and turns it
//! into the ordered option lists a tunnel provider client consumes. Opening
//! the tunnel itself is left to a [`SessionConnector`].
//!
//! ## Quick Start
//!
//! ```rust
//! use ferrolisten::prelude::*;
//!
//! # fn example() -> ferrolisten::Result<()> {
//! let config = SessionConfig::from_directives(
//!     "Caddyfile",
//!     "ngrok {
//!         authtoken {env.NGROK_AUTHTOKEN}
//!         tunnel http {
//!             domain app.example.com
//!             basic_auth alice correcthorse
//!         }
//!     }",
//! )?;
//!
//! let plan = provision(&config, &EnvReplacer::new())?;
//! assert_eq!(plan.kind, TunnelKind::Http);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`ferrolisten-common`] - Errors and shared constants
//! - [`ferrolisten-directive`] - Directive text lexer and parser
//! - [`ferrolisten-tunnel`] - Tunnel variants, validators and option builder
//!
//! This crate adds the session layer on top and re-exports the most
//! commonly used items.

mod duration;

pub mod config;
pub mod option;
pub mod provision;
pub mod replacer;

// Re-export subcrates
pub use ferrolisten_common as common;
pub use ferrolisten_directive as directive;
pub use ferrolisten_tunnel as tunnel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::common::{ListenError, Result, SyntaxError, ValidationError};

    pub use crate::tunnel::{
        EndpointOption, HttpTunnel, LabeledTunnel, NoopReplacer, Replacer, TcpTunnel, TlsTunnel,
        Tunnel, TunnelKind,
    };

    pub use crate::config::SessionConfig;
    pub use crate::option::SessionOption;
    pub use crate::provision::{establish, provision, DryRunConnector, ProvisionPlan, SessionConnector};
    pub use crate::replacer::EnvReplacer;
}

// Convenience re-exports at crate root
pub use common::{ListenError, Result, SyntaxError, ValidationError};
pub use config::SessionConfig;
pub use option::SessionOption;
pub use provision::{establish, provision, DryRunConnector, ProvisionPlan, SessionConnector};
pub use replacer::EnvReplacer;
pub use tunnel::{EndpointOption, NoopReplacer, Replacer, Tunnel, TunnelKind};
