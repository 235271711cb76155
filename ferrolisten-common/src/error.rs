//! Error types for `FerroListen`

use thiserror::Error;

/// Main error type for configuration loading and provisioning
#[derive(Error, Debug)]
pub enum ListenError {
    /// Malformed directive shape (arity, unknown subdirective, unterminated block)
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Well-formed but semantically invalid configuration
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A validation failure raised while reading directive text
    #[error("{file}:{line} - {source}")]
    InvalidDirective {
        file: String,
        line: usize,
        source: ValidationError,
    },

    /// A session was configured without a tunnel variant
    #[error("Incomplete configuration: {0}")]
    ConfigurationIncomplete(String),

    /// Structured (JSON) configuration could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The session-establishment client rejected the provisioned options
    #[error("Connection failed: {0}")]
    Connect(String),
}

/// A directive parse failure, anchored to its source position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{file}:{line} - Error during parsing: {message}")]
pub struct SyntaxError {
    pub file: String,
    pub line: usize,
    pub message: String,
}

impl SyntaxError {
    pub fn new(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

/// Semantic validation failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("a label is required for labeled tunnels")]
    LabelRequired,

    #[error("basic auth username must not be empty")]
    EmptyUsername,

    #[error("basic auth password for user '{username}' must not be empty")]
    EmptyPassword { username: String },

    #[error("basic auth password for user '{username}' must be at least {min} characters")]
    PasswordTooShort { username: String, min: usize },

    #[error("invalid circuit breaker ratio '{value}'")]
    InvalidRatio { value: String },

    #[error("unresolved placeholder '{placeholder}'")]
    Substitution { placeholder: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ListenError>;

impl ListenError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, ListenError::Syntax(_))
    }

    pub fn is_validation(&self) -> bool {
        self.validation().is_some()
    }

    /// The validation failure, whether or not it carries a source position.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ListenError::Validation(e) | ListenError::InvalidDirective { source: e, .. } => Some(e),
            _ => None,
        }
    }
}
