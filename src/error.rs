use crate::generator::GeneratedSecret;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),

    #[error("Invalid generation request: {0}")]
    InvalidRequest(String),

    /// Password was generated but could not be written.
    /// The secret is carried along, the caller may still use it.
    #[error("Could not persist generated password to {}: {source}", .path.display())]
    PersistenceFailure {
        secret: GeneratedSecret,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PasswordError {
    /// Recovers the in-memory secret from a persistence failure
    pub fn into_secret(self) -> Option<GeneratedSecret> {
        match self {
            PasswordError::PersistenceFailure { secret, .. } => Some(secret),
            _ => None,
        }
    }
}
