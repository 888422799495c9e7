//! Password handler
//!
//! GET /generatePass

use crate::handlers::first_param;
use crate::models::Envelope;
use crate::services::password::{generate_default, parse_password_num};
use crate::utils::error::PasswordParamError;
use axum::extract::Query;
use tracing::debug;

/// Query parameters of GET /generatePass
#[derive(Debug, Default)]
pub struct PasswordQuery {
    /// Requested length, "12" when absent or empty
    pub password_num: Option<String>,
}

impl PasswordQuery {
    pub fn from_params(params: &[(String, String)]) -> Self {
        Self {
            password_num: first_param(params, "password_num").map(str::to_string),
        }
    }
}

/// GET /generatePass
///
/// Parameter errors are answered with a plain text line, not an envelope.
pub async fn generate_pass(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Envelope, PasswordParamError> {
    let query = PasswordQuery::from_params(&params);
    let count = parse_password_num(query.password_num.as_deref())?;
    debug!("Generating password of requested length {}", count);

    Ok(Envelope::password(generate_default(count)))
}
