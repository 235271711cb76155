//! Provisioning: turn a loaded [`SessionConfig`] into the option sets the
//! tunnel provider client consumes, and hand them over.
//!
//! # Example
//!
//! ```rust
//! use ferrolisten::{establish, DryRunConnector, EnvReplacer, SessionConfig};
//!
//! # fn example() -> ferrolisten::Result<()> {
//! let config = SessionConfig::from_directives(
//!     "Caddyfile",
//!     "ngrok {\n tunnel labeled {\n  label edge edghts_123\n }\n}",
//! )?;
//! let plan = establish(&config, &EnvReplacer::new(), &DryRunConnector)?;
//! assert_eq!(plan.tunnel.len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::config::SessionConfig;
use crate::option::SessionOption;
use ferrolisten_common::Result;
use ferrolisten_tunnel::{EndpointOption, Replacer, TunnelKind};
use serde::Serialize;
use tracing::{info, warn};

/// Everything the provider client needs to open one tunnel session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProvisionPlan {
    pub session: Vec<SessionOption>,
    pub kind: TunnelKind,
    pub tunnel: Vec<EndpointOption>,
}

/// The external session-establishment client.
///
/// Called exactly once per [`establish`]; it owns all network I/O and may
/// block until the session is ready or fails.
pub trait SessionConnector {
    type Session;

    fn connect(&self, plan: ProvisionPlan) -> Result<Self::Session>;
}

/// Connector that opens nothing and returns the plan as the "session"
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunConnector;

impl SessionConnector for DryRunConnector {
    type Session = ProvisionPlan;

    fn connect(&self, plan: ProvisionPlan) -> Result<ProvisionPlan> {
        Ok(plan)
    }
}

/// Validate the configuration and build both option sets.
///
/// Fails with `ConfigurationIncomplete` when no tunnel is configured and
/// with the tunnel's validation error otherwise. Every call builds a fresh,
/// independent plan.
pub fn provision(config: &SessionConfig, replacer: &dyn Replacer) -> Result<ProvisionPlan> {
    let tunnel = config.tunnel()?;
    tunnel.validate()?;

    if let Some(scheme) = tunnel.ignored_scheme() {
        warn!(scheme, "Ignoring unsupported scheme, expected http or https");
    }
    if let Some(ratio) = tunnel.unusual_ratio() {
        warn!(ratio, "Circuit breaker ratio outside 0..=1, passing it through");
    }

    let tunnel = tunnel.clone().substitute(replacer)?;
    if let Some(labels) = tunnel.labels() {
        for (label, value) in labels {
            info!(label = %label, value = %value, "applying label");
        }
    }

    let plan = ProvisionPlan {
        session: config.build_options(replacer)?,
        kind: tunnel.kind(),
        tunnel: tunnel.build_options(),
    };

    info!(
        kind = %plan.kind,
        session_options = plan.session.len(),
        tunnel_options = plan.tunnel.len(),
        "Provisioned tunnel session"
    );
    Ok(plan)
}

/// Provision, then hand the plan to `connector`. No retries.
pub fn establish<C>(
    config: &SessionConfig,
    replacer: &dyn Replacer,
    connector: &C,
) -> Result<C::Session>
where
    C: SessionConnector + ?Sized,
{
    let plan = provision(config, replacer)?;
    connector.connect(plan)
}
