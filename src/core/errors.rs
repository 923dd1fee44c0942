use crate::core::types::Capability;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Clock synchronization failed: {0}")]
    ClockSyncError(String),

    #[error("API error: {code} - {message}")]
    ApiError { code: i32, message: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Authentication required for this endpoint")]
    AuthenticationRequired,

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Unsupported capability: {0}")]
    Unsupported(Capability),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("HTTP client could not be built: {0}")]
    ClientBuildError(String),
}

/// Coarse classification used by callers that only care about who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client could not be built; nothing was sent.
    Construction,
    /// The request left the process but no usable JSON came back.
    Transport,
    /// The caller asked for something the client refuses to do.
    Logic,
}

impl ExchangeError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ClockSyncError(_) | Self::ConfigError(_) | Self::ClientBuildError(_) => {
                ErrorKind::Construction
            }
            Self::ApiError { .. }
            | Self::NetworkError(_)
            | Self::DeserializationError(_)
            | Self::SerializationError(_) => ErrorKind::Transport,
            Self::AuthError(_)
            | Self::AuthenticationRequired
            | Self::InvalidParameters(_)
            | Self::NotImplemented(_)
            | Self::Unsupported(_) => ErrorKind::Logic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ExchangeError::ClockSyncError("bad".to_string()).kind(),
            ErrorKind::Construction
        );
        assert_eq!(
            ExchangeError::ClientBuildError("no TLS backend".to_string()).kind(),
            ErrorKind::Construction
        );
        assert_eq!(
            ExchangeError::ApiError {
                code: 502,
                message: "bad gateway".to_string()
            }
            .kind(),
            ErrorKind::Transport
        );
        assert_eq!(
            ExchangeError::NotImplemented("percent sizing".to_string()).kind(),
            ErrorKind::Logic
        );
        assert_eq!(
            ExchangeError::Unsupported(Capability::Leverage).kind(),
            ErrorKind::Logic
        );
    }

    #[test]
    fn test_unsupported_message_names_capability() {
        let err = ExchangeError::Unsupported(Capability::HedgeMode);
        assert_eq!(err.to_string(), "Unsupported capability: hedge position mode");
    }
}
