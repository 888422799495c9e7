//! Upstream HTTP fetcher
//!
//! Issues a single GET per call and hands back the raw body bytes

use crate::config::Settings;
use crate::utils::error::GatewayResult;
use crate::utils::logging::preview_body;
use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header::ACCEPT, Client};
use std::time::Duration;
use tracing::debug;

/// Fetches raw upstream payloads
///
/// Implementations must not interpret the HTTP status: the upstreams report
/// failures inside the JSON body.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET `url` and return the complete response body
    async fn fetch(&self, url: &str) -> GatewayResult<Bytes>;
}

/// reqwest-backed fetcher
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher using the upstream timeout from settings
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_timeout(settings.upstream_timeout())
    }

    /// Create a fetcher with a custom per-request deadline
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("joke-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> GatewayResult<Bytes> {
        debug!("Fetching upstream: {}", url);

        let response = self.client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        debug!("Upstream answered {} - body: {}", status, preview_body(&body));
        Ok(body)
    }
}
