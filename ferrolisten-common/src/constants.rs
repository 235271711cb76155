//! Shared defaults and limits for FerroListen.
//!
//! Use these constants instead of magic numbers so the directive grammar,
//! the structured loader, and the validators agree.

/// Minimum length of a Basic-Auth password.
pub const MIN_BASIC_AUTH_PASSWORD_LEN: usize = 8;

/// File name reported in syntax errors when the input has no path.
pub const DEFAULT_SOURCE_NAME: &str = "Caddyfile";

/// Prefix of environment placeholders, as in `{env.NGROK_AUTHTOKEN}`.
pub const ENV_PLACEHOLDER_PREFIX: &str = "env.";

/// Environment variable the tunnel provider reads when no token is configured.
pub const AUTHTOKEN_ENV_VAR: &str = "NGROK_AUTHTOKEN";
