// ABOUTME: Defines all error types for the roba library using thiserror.
// ABOUTME: Each concern has its own error enum, unified under RobaError.

/// Top-level error type for the roba library.
#[derive(Debug, thiserror::Error)]
pub enum RobaError {
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from decoding scope strings into permissions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Invalid scope string '{scope}': {reason}")]
    InvalidScopeString { scope: String, reason: &'static str },
}

impl CodecError {
    pub(crate) fn invalid(scope: &str, reason: &'static str) -> Self {
        Self::InvalidScopeString {
            scope: scope.to_string(),
            reason,
        }
    }

    /// The scope string that failed to decode.
    pub fn scope(&self) -> &str {
        match self {
            Self::InvalidScopeString { scope, .. } => scope,
        }
    }
}

/// Errors from loading and building a policy configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid permissions: {0}")]
    Codec(#[from] CodecError),

    #[error("Collective '{0}' is declared more than once")]
    DuplicateCollective(String),

    #[error("Collective '{collective}' inherits from unknown collective '{base}'")]
    UnknownBase { collective: String, base: String },
}
