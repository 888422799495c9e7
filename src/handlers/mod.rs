//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod health;
pub mod jokes;
pub mod password;

use crate::config::{AppConfig, Settings};
use crate::middleware::logging::request_logging_middleware;
use crate::models::Envelope;
use crate::services::{Fetch, HttpFetcher, JokeService};
use crate::utils::error::GatewayError;
use anyhow::Result;
use axum::{error_handling::HandleErrorLayer, middleware, routing::get, BoxError, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub config: AppConfig,
    pub jokes: JokeService,
}

/// Create application router
pub async fn create_router(settings: Settings, app_config: AppConfig) -> Result<Router> {
    let fetcher = Arc::new(HttpFetcher::new(&settings)?);
    Ok(create_router_with_fetcher(settings, app_config, fetcher))
}

/// Create application router around an explicit upstream fetcher
pub fn create_router_with_fetcher(
    settings: Settings,
    app_config: AppConfig,
    fetcher: Arc<dyn Fetch>,
) -> Router {
    let jokes = JokeService::new(fetcher, app_config.urls.clone());
    let request_timeout = settings.request_timeout();

    // Create application state
    let app_state = Arc::new(AppState {
        settings,
        config: app_config,
        jokes,
    });

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(HandleErrorLayer::new(move |err: BoxError| async move {
            request_failed(err, request_timeout)
        }))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(request_logging_middleware));

    // Create routes
    Router::new()
        .route("/badJoke", get(jokes::bad_joke))
        .route("/chackNorisJoke", get(jokes::chuck_norris_joke))
        .route("/EvilInsult", get(jokes::evil_insult))
        .route("/generatePass", get(password::generate_pass))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .with_state(app_state)
        .layer(middleware_stack)
}

/// Errors escaping the middleware stack still answer with the failure envelope
fn request_failed(err: BoxError, request_timeout: Duration) -> Envelope {
    let error = if err.is::<tower::timeout::error::Elapsed>() {
        GatewayError::Timeout(request_timeout.as_secs())
    } else {
        GatewayError::Rejected(err.to_string())
    };
    error.log();
    error.to_envelope()
}

/// First value of a query parameter; later repetitions are ignored
pub fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}
