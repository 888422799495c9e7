//! Error handling module
//!
//! Defines error types and handling logic used in the project

use crate::models::envelope::{Envelope, CODE_FAILED};
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Gateway error types
///
/// Every variant is recovered at the handler boundary and rendered as the
/// failure envelope. The variants only differ in how they are logged.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Upstream could not be reached or its body could not be read
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream payload is not the JSON shape we expect
    #[error("Malformed upstream payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Upstream payload decoded, but its status field reports a failure
    #[error("Upstream reported failure: {0}")]
    Rejected(String),

    /// Caller-supplied parameter rejected before any network call
    #[error("{0}")]
    Validation(String),

    /// Inbound request outlived the request deadline, in seconds
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),
}

impl GatewayError {
    /// Envelope code carried by the failure body
    pub fn code(&self) -> u16 {
        CODE_FAILED
    }

    /// Get error kind string
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Transport(_) => "transport_error",
            GatewayError::Malformed(_) => "decode_error",
            GatewayError::Rejected(_) => "upstream_rejected",
            GatewayError::Validation(_) => "validation_error",
            GatewayError::Timeout(_) => "timeout",
        }
    }

    /// Whether the error originates from the caller rather than an upstream
    pub fn is_client_error(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }

    /// Log the failure at the handler boundary
    pub fn log(&self) {
        if self.is_client_error() {
            tracing::warn!("Rejected request: {} - kind: {}", self, self.kind());
        } else {
            tracing::error!("Upstream call failed: {} - kind: {}", self, self.kind());
        }
    }

    /// Convert to the failure envelope
    pub fn to_envelope(&self) -> Envelope {
        Envelope::error(self.to_string())
    }
}

/// Business failures travel inside the body, the transport status stays 200
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        self.log();
        self.to_envelope().into_response()
    }
}

/// Result type alias
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Rejections of the `password_num` query parameter
///
/// These are written as a plain text line instead of a JSON envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordParamError {
    /// More than three characters were supplied
    #[error("Max value of 'password_num' = 32")]
    TooLong,

    /// Value is not a non-negative integer
    #[error("Не корректный тип введите число от 1 до 999")]
    NotANumber(String),
}

impl IntoResponse for PasswordParamError {
    fn into_response(self) -> Response {
        if let PasswordParamError::NotANumber(raw) = &self {
            tracing::warn!("Invalid 'password_num' value: {:?}", raw);
        }

        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

/// Error helper functions
pub mod helpers {
    use super::*;

    /// Create validation error
    pub fn validation_error(message: impl Into<String>) -> GatewayError {
        GatewayError::Validation(message.into())
    }

    /// Create upstream rejection error
    pub fn rejected_error(message: impl Into<String>) -> GatewayError {
        GatewayError::Rejected(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed() -> GatewayError {
        serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(malformed().kind(), "decode_error");
        assert_eq!(GatewayError::Rejected("x".to_string()).kind(), "upstream_rejected");
        assert_eq!(GatewayError::Validation("x".to_string()).kind(), "validation_error");
    }

    #[test]
    fn test_all_errors_use_code_400() {
        assert_eq!(malformed().code(), 400);
        assert_eq!(GatewayError::Rejected("x".to_string()).code(), 400);
        assert_eq!(GatewayError::Validation("x".to_string()).code(), 400);
        assert_eq!(GatewayError::Timeout(10).code(), 400);
    }

    #[test]
    fn test_code_matches_envelope() {
        for err in [
            malformed(),
            GatewayError::Rejected("x".to_string()),
            GatewayError::Validation("x".to_string()),
            GatewayError::Timeout(10),
        ] {
            assert_eq!(err.code(), err.to_envelope().code());
        }
    }

    #[test]
    fn test_validation_message_is_unprefixed() {
        let err = helpers::validation_error("'de' language is not supported. Use [ru, en]");
        assert_eq!(err.to_string(), "'de' language is not supported. Use [ru, en]");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_password_param_messages() {
        assert_eq!(PasswordParamError::TooLong.to_string(), "Max value of 'password_num' = 32");
        assert_eq!(
            PasswordParamError::NotANumber("abc".to_string()).to_string(),
            "Не корректный тип введите число от 1 до 999"
        );
    }
}
