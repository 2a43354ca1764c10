//! Common error types for Hourlock components.

use thiserror::Error;

/// Common errors across Hourlock components
#[derive(Debug, Error)]
pub enum HourlockError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Identity was never registered
    #[error("Unknown identity: {0}")]
    UnknownIdentity(String),

    /// Secret and challenge keys decompose to different digit counts.
    ///
    /// Both keys are generated with the same configured digit length, so this
    /// signals a configuration or generation bug, not user error.
    #[error("Key length mismatch: secret has {secret} digits, challenge has {challenge}")]
    LengthMismatch { secret: usize, challenge: usize },

    /// Authentication failed (wrong proof, replayed attempt, or unknown identity)
    #[error("Authentication failed")]
    AuthFailed,

    /// Invalid input/request
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HourlockError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Config(_) => 500,
            Self::UnknownIdentity(_) => 404,
            Self::LengthMismatch { .. } => 500,
            Self::AuthFailed => 401,
            Self::InvalidInput(_) => 400,
            Self::Internal(_) => 500,
        }
    }
}
