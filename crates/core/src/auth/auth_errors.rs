use thiserror::Error;

/// Custom error type for identity and session operations
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password; deliberately indistinguishable.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email '{0}' is already registered")]
    EmailTaken(String),

    #[error("No active session")]
    NotAuthenticated,

    #[error("Password hashing failed: {0}")]
    Hashing(String),
}
