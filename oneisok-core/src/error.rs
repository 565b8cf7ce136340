//! Error types for the oneisok-core library

use thiserror::Error;

/// Main error type for quote relay operations
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Mail transport error: {0}")]
    Transport(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Result type alias for relay operations
pub type Result<T> = std::result::Result<T, RelayError>;

#[cfg(feature = "server")]
impl From<lettre::transport::smtp::Error> for RelayError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}

impl PartialEq for RelayError {
    fn eq(&self, other: &Self) -> bool {
        match self {
            RelayError::Configuration(msg) => {
                matches!(other, RelayError::Configuration(o) if msg == o)
            }
            RelayError::Transport(msg) => {
                matches!(other, RelayError::Transport(o) if msg == o)
            }
            RelayError::Network(msg) => {
                matches!(other, RelayError::Network(o) if msg == o)
            }
        }
    }
}
