//! Session-level options handed to the tunnel provider client

use ferrolisten_common::AUTHTOKEN_ENV_VAR;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "option", content = "value", rename_all = "snake_case")]
pub enum SessionOption {
    /// Explicit authentication token
    Authtoken(String),
    /// Let the provider read the token from `NGROK_AUTHTOKEN`
    AuthtokenFromEnv,
    Metadata(String),
    Region(String),
    Server(String),
    HeartbeatInterval(#[serde(with = "crate::duration::required")] Duration),
    HeartbeatTolerance(#[serde(with = "crate::duration::required")] Duration),
}

impl fmt::Display for SessionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionOption::Authtoken(_) => f.write_str("authtoken ****"),
            SessionOption::AuthtokenFromEnv => write!(f, "authtoken from ${AUTHTOKEN_ENV_VAR}"),
            SessionOption::Metadata(metadata) => write!(f, "metadata {metadata:?}"),
            SessionOption::Region(region) => write!(f, "region {region}"),
            SessionOption::Server(server) => write!(f, "server {server}"),
            SessionOption::HeartbeatInterval(d) => {
                write!(f, "heartbeat_interval {}", humantime::format_duration(*d))
            }
            SessionOption::HeartbeatTolerance(d) => {
                write!(f, "heartbeat_tolerance {}", humantime::format_duration(*d))
            }
        }
    }
}
