//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("RPC error ({code}): {message}")]
    Rpc { code: i32, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl SdkError {
    /// True when the service could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        matches!(self, SdkError::Connection(_) | SdkError::Transport(_))
    }
}

impl From<jsonrpsee::core::ClientError> for SdkError {
    fn from(e: jsonrpsee::core::ClientError) -> Self {
        match e {
            jsonrpsee::core::ClientError::Call(call_err) => SdkError::Rpc {
                code: call_err.code(),
                message: call_err.message().to_string(),
            },
            jsonrpsee::core::ClientError::Transport(e) => SdkError::Transport(e.to_string()),
            jsonrpsee::core::ClientError::RequestTimeout => {
                SdkError::Transport("Request timed out".to_string())
            }
            jsonrpsee::core::ClientError::RestartNeeded(_) => {
                SdkError::Connection("Connection restart needed".to_string())
            }
            jsonrpsee::core::ClientError::ParseError(e) => {
                SdkError::Other(format!("Parse error: {}", e))
            }
            _ => SdkError::Other(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonrpsee::types::ErrorObjectOwned;

    #[test]
    fn test_call_error_keeps_code() {
        let call = ErrorObjectOwned::owned(4001, "Author a-1 not found", None::<()>);
        let err = SdkError::from(jsonrpsee::core::ClientError::Call(call));
        match err {
            SdkError::Rpc { code, message } => {
                assert_eq!(code, 4001);
                assert_eq!(message, "Author a-1 not found");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_timeout_is_unreachable() {
        let err = SdkError::from(jsonrpsee::core::ClientError::RequestTimeout);
        assert!(err.is_unreachable());
        assert!(!SdkError::Other("x".into()).is_unreachable());
    }
}
