//! Uniform response envelope
//!
//! Every route answers with exactly one of these JSON objects. Business
//! success or failure is signalled by `code`, the HTTP status is always 200.

use crate::utils::error::GatewayResult;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Envelope code for a successful call
pub const CODE_OK: u16 = 200;

/// Envelope code for a failed call
pub const CODE_FAILED: u16 = 400;

/// Response envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    /// Joke or insult payload
    Joke { joke: String, code: u16 },
    /// Generated password payload
    Password { password: String, code: u16 },
    /// Failure description
    Error { error: String, code: u16 },
}

impl Envelope {
    pub fn joke(joke: impl Into<String>) -> Self {
        Envelope::Joke { joke: joke.into(), code: CODE_OK }
    }

    pub fn password(password: impl Into<String>) -> Self {
        Envelope::Password { password: password.into(), code: CODE_OK }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error { error: message.into(), code: CODE_FAILED }
    }

    /// Map a service result onto the envelope, logging the failure cause
    pub fn from_result(result: GatewayResult<String>, success: fn(String) -> Envelope) -> Self {
        match result {
            Ok(value) => success(value),
            Err(e) => {
                e.log();
                e.to_envelope()
            }
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Envelope::Joke { code, .. }
            | Envelope::Password { code, .. }
            | Envelope::Error { code, .. } => *code,
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, Envelope::Error { .. })
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::GatewayError;
    use serde_json::json;

    #[test]
    fn test_success_shapes() {
        assert_eq!(
            serde_json::to_value(Envelope::joke("knock knock")).unwrap(),
            json!({"joke": "knock knock", "code": 200})
        );
        assert_eq!(
            serde_json::to_value(Envelope::password("abCD1234!@#$")).unwrap(),
            json!({"password": "abCD1234!@#$", "code": 200})
        );
    }

    #[test]
    fn test_error_shape() {
        assert_eq!(
            serde_json::to_value(Envelope::error("boom")).unwrap(),
            json!({"error": "boom", "code": 400})
        );
    }

    #[test]
    fn test_from_result() {
        let ok = Envelope::from_result(Ok("funny".to_string()), Envelope::joke);
        assert_eq!(ok, Envelope::joke("funny"));
        assert_eq!(ok.code(), 200);

        let err = Envelope::from_result(
            Err(GatewayError::Validation("nope".to_string())),
            Envelope::joke,
        );
        assert_eq!(err, Envelope::error("nope"));
        assert_eq!(err.code(), 400);
        assert!(!err.is_success());
    }

    #[tokio::test]
    async fn test_failure_still_http_200_json() {
        let response = Envelope::error("boom").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
    }
}
