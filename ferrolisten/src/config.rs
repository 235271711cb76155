//! Session configuration for `FerroListen`.
//!
//! A [`SessionConfig`] binds the provider credentials and session settings
//! to exactly one [`Tunnel`]. It can be read from directive text:
//!
//! ```text
//! ngrok {
//!     authtoken {env.NGROK_AUTHTOKEN}
//!     region eu
//!     heartbeat_interval 10s
//!     tunnel http {
//!         domain app.example.com
//!     }
//! }
//! ```
//!
//! or from the equivalent JSON record, with the tunnel tagged by `type`.
//! Loading only checks syntax and field shapes; call
//! [`validate`](SessionConfig::validate) or [`provision`](crate::provision)
//! before using the result.

use crate::option::SessionOption;
use ferrolisten_common::{ListenError, Result, DEFAULT_SOURCE_NAME};
use ferrolisten_directive::{parse_single, Directive};
use ferrolisten_tunnel::{Replacer, Tunnel};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Provider token; `None` or empty means "read it from the environment"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authtoken: Option<String>,

    /// Opaque session metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,

    /// Provider region hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Provider server address override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    #[serde(
        with = "crate::duration::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub heartbeat_interval: Option<Duration>,

    #[serde(
        with = "crate::duration::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub heartbeat_tolerance: Option<Duration>,

    /// The tunnel to open; required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunnel: Option<Tunnel>,
}

impl SessionConfig {
    /// Parse directive text holding a single outer block such as `ngrok { ... }`.
    ///
    /// `name` is the source name reported in syntax errors.
    pub fn from_directives(name: &str, text: &str) -> Result<Self> {
        let root = parse_single(name, text)?;
        Self::from_directive(&root)
    }

    /// Build from an already parsed outer block. The block name is free but
    /// it must not carry arguments.
    pub fn from_directive(root: &Directive) -> Result<Self> {
        root.expect_no_args()?;

        let mut config = Self::default();
        for d in root.subdirectives() {
            config.apply(d)?;
        }
        Ok(config)
    }

    fn apply(&mut self, d: &Directive) -> Result<()> {
        match d.name.as_str() {
            "authtoken" => self.authtoken = d.optional_arg()?.map(str::to_string),
            "metadata" => self.metadata = Some(d.one_arg()?.to_string()),
            "region" => self.region = Some(d.one_arg()?.to_string()),
            "server" => self.server = Some(d.one_arg()?.to_string()),
            "heartbeat_interval" => self.heartbeat_interval = Some(d.duration()?),
            "heartbeat_tolerance" => self.heartbeat_tolerance = Some(d.duration()?),
            "tunnel" => {
                if self.tunnel.is_some() {
                    return Err(d.err("a session takes exactly one tunnel").into());
                }
                self.tunnel = Some(Tunnel::from_directive(d)?);
            }
            _ => return Err(d.unrecognized().into()),
        }
        Ok(())
    }

    /// Parse the structured (JSON) form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration file: JSON for `.json`, directive text otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&text)
        } else {
            let name = path
                .file_name()
                .map_or_else(|| DEFAULT_SOURCE_NAME.into(), |n| n.to_string_lossy());
            Self::from_directives(&name, &text)
        }
    }

    /// Check that a tunnel is configured and that it is valid.
    pub fn validate(&self) -> Result<()> {
        let tunnel = self.tunnel()?;
        tunnel.validate()?;
        Ok(())
    }

    /// The configured tunnel, or a `ConfigurationIncomplete` error.
    pub fn tunnel(&self) -> Result<&Tunnel> {
        self.tunnel
            .as_ref()
            .ok_or_else(|| ListenError::ConfigurationIncomplete("tunnel is required".into()))
    }

    /// Session options in provider order, each only when set.
    ///
    /// The token is passed through `replacer` first; a token that ends up
    /// empty falls back to the provider's environment lookup.
    pub fn build_options(&self, replacer: &dyn Replacer) -> Result<Vec<SessionOption>> {
        let mut opts = Vec::new();

        let token = match self.authtoken.as_deref() {
            Some(token) => replacer.replace(token)?,
            None => String::new(),
        };
        if token.is_empty() {
            opts.push(SessionOption::AuthtokenFromEnv);
        } else {
            opts.push(SessionOption::Authtoken(token));
        }

        if let Some(metadata) = self.metadata.as_deref().filter(|m| !m.is_empty()) {
            opts.push(SessionOption::Metadata(metadata.to_string()));
        }
        if let Some(region) = self.region.as_deref().filter(|r| !r.is_empty()) {
            opts.push(SessionOption::Region(region.to_string()));
        }
        if let Some(server) = self.server.as_deref().filter(|s| !s.is_empty()) {
            opts.push(SessionOption::Server(server.to_string()));
        }
        if let Some(interval) = self.heartbeat_interval {
            opts.push(SessionOption::HeartbeatInterval(interval));
        }
        if let Some(tolerance) = self.heartbeat_tolerance {
            opts.push(SessionOption::HeartbeatTolerance(tolerance));
        }

        Ok(opts)
    }
}
