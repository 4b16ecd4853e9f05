//! HTTP client for the Kinologue inference endpoint

use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::config::AppConfig;

/// Body of the single POST the endpoint accepts
#[derive(Debug, Serialize)]
struct AskPayload<'a> {
    user_query: &'a str,
    raw_listings_path: &'a str,
}

#[derive(Clone)]
pub struct KinologueClient {
    http: reqwest::Client,
    endpoint: String,
    raw_listings_path: String,
}

impl KinologueClient {
    pub fn new(endpoint: String, raw_listings_path: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint,
            raw_listings_path,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.endpoint_url.clone(),
            config.raw_listings_path.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Send one query and return the response body untouched.
    ///
    /// Non-2xx statuses become errors that carry the status code.
    pub async fn ask(&self, user_query: &str) -> Result<String> {
        let payload = AskPayload {
            user_query,
            raw_listings_path: &self.raw_listings_path,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .context("Could not reach Kinologue")?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Kinologue returned an error status");
            bail!("HTTP {}", status);
        }

        let body = response
            .text()
            .await
            .context("Failed to read Kinologue response")?;
        tracing::debug!(status = status.as_u16(), body_len = body.len(), "Kinologue response received");
        Ok(body)
    }
}
