use http::StatusCode;
use thiserror::Error;

/// Narrows down why a request never produced a gateway response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request did not complete within the configured timeout
    Timeout,
    /// DNS, TCP or TLS failure while connecting
    Connection,
    /// The connection broke while reading the response body
    Body,
    /// Any other failure reported by the HTTP stack
    Other,
}

/// Errors returned by Lazerpay client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request build error: {0}")]
    RequestBuild(String),

    #[error("Transport error ({kind:?}): {message}")]
    Transport {
        kind: TransportErrorKind,
        message: String,
    },

    #[error("Gateway error: status={status}")]
    Gateway { status: StatusCode, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    pub(crate) fn transport(kind: TransportErrorKind, err: &reqwest::Error) -> Self {
        Self::Transport {
            kind,
            message: err.to_string(),
        }
    }

    /// True when the call gave up because the timeout elapsed
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Transport {
                kind: TransportErrorKind::Timeout,
                ..
            }
        )
    }

    /// HTTP status of a gateway rejection, if this is one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Gateway { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::RequestBuild(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_gateway_errors() {
        let err = ClientError::Gateway {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        };
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!err.is_timeout());

        let err = ClientError::InvalidRequest("amount".into());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_timeout_detection() {
        let err = ClientError::Transport {
            kind: TransportErrorKind::Timeout,
            message: "operation timed out".into(),
        };
        assert!(err.is_timeout());

        let err = ClientError::Transport {
            kind: TransportErrorKind::Connection,
            message: "connection refused".into(),
        };
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_serde_error_is_request_build() {
        let err: ClientError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, ClientError::RequestBuild(_)));
    }
}
