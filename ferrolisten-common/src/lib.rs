//! Common error types and constants for `FerroListen`

pub mod constants;
pub mod error;

pub use constants::{
    AUTHTOKEN_ENV_VAR, DEFAULT_SOURCE_NAME, ENV_PLACEHOLDER_PREFIX, MIN_BASIC_AUTH_PASSWORD_LEN,
};
pub use error::{ListenError, Result, SyntaxError, ValidationError};
