//! Failures reported by the remote gateway

use thiserror::Error;

/// Why a gateway call did not produce a payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The server answered with a non-2xx status
    #[error("{}", .body.as_deref().unwrap_or("HTTP error"))]
    Status { code: u16, body: Option<String> },
    /// The request never produced a response (connection, timeout, ...)
    #[error("{0}")]
    Transport(String),
    /// The response body could not be decoded
    #[error("{0}")]
    Decode(String),
    /// A 2xx response arrived without the expected body
    #[error("Respuesta vacía del servidor")]
    EmptyBody,
}

impl GatewayError {
    /// HTTP status code, when the server answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Response body text, when the server sent a non-empty one
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
