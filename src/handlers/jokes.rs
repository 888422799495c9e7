//! Joke and insult handlers
//!
//! GET /badJoke, GET /chackNorisJoke, GET /EvilInsult

use crate::handlers::{first_param, AppState};
use crate::models::Envelope;
use crate::services::{JokeSource, Language};
use crate::utils::error::GatewayResult;
use axum::extract::{Query, State};
use std::sync::Arc;
use tracing::debug;

/// Query parameters of GET /EvilInsult
#[derive(Debug, Default)]
pub struct InsultQuery {
    /// Insult language, "en" when absent
    pub lang: Option<String>,
}

impl InsultQuery {
    pub fn from_params(params: &[(String, String)]) -> Self {
        Self {
            lang: first_param(params, "lang").map(str::to_string),
        }
    }

    /// Resolve the requested language; a present but empty value is rejected
    pub fn language(&self) -> GatewayResult<Language> {
        match &self.lang {
            None => Ok(Language::default()),
            Some(raw) => Language::parse(raw),
        }
    }
}

/// GET /badJoke
pub async fn bad_joke(State(state): State<Arc<AppState>>) -> Envelope {
    debug!("Handling bad joke request");
    Envelope::from_result(state.jokes.joke(JokeSource::BadJoke).await, Envelope::joke)
}

/// GET /chackNorisJoke
pub async fn chuck_norris_joke(State(state): State<Arc<AppState>>) -> Envelope {
    debug!("Handling Chuck Norris joke request");
    Envelope::from_result(state.jokes.joke(JokeSource::ChuckNorris).await, Envelope::joke)
}

/// GET /EvilInsult
///
/// The language is validated before the upstream is contacted.
pub async fn evil_insult(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Envelope {
    let query = InsultQuery::from_params(&params);
    debug!("Handling evil insult request: {:?}", query);

    let result = match query.language() {
        Ok(lang) => state.jokes.joke(JokeSource::EvilInsult(lang)).await,
        Err(e) => Err(e),
    };

    Envelope::from_result(result, Envelope::joke)
}
