//! HTTP client for the miner stats service.

use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::config::UpstreamConfig;

/// Error type for upstream lookups.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("invalid upstream base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("failed to build upstream client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned a non-JSON body: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Client for the miner stats service.
///
/// Wallet addresses are passed through unvalidated; a malformed address
/// produces whatever error the upstream yields.
#[derive(Debug, Clone)]
pub struct MinerApi {
    client: reqwest::Client,
    base_url: Url,
}

impl MinerApi {
    /// Build a client from the upstream configuration.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(&config.base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(UpstreamError::Build)?;

        Ok(Self { client, base_url })
    }

    /// Look up mining statistics for a wallet address.
    ///
    /// Issues exactly one GET request and relays the decoded JSON payload
    /// without inspecting its shape.
    pub async fn user_address(&self, wallet: &str) -> Result<serde_json::Value, UpstreamError> {
        let url = self.lookup_url(wallet);

        tracing::debug!(url = %url, "Fetching miner stats");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(UpstreamError::Decode)
    }

    /// Build the lookup URL for a wallet address.
    fn lookup_url(&self, wallet: &str) -> String {
        format!(
            "{}/user_address/{}",
            self.base_url.as_str().trim_end_matches('/'),
            wallet
        )
    }
}
