// Anthropic Messages API client
// Author: kelexine (https://github.com/kelexine)

use crate::config::{AnthropicConfig, PerformanceConfig};
use crate::credentials::ApiKey;
use crate::error::{ProxyError, Result};
use crate::models::anthropic::MessagesRequest;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Status and opaque JSON body returned by the Messages API.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl UpstreamResponse {
    /// Turn a non-2xx answer into a relayable error.
    pub fn into_result(self) -> Result<Value> {
        if self.status.is_success() {
            Ok(self.body)
        } else {
            Err(ProxyError::Upstream {
                status: self.status,
                body: self.body,
            })
        }
    }
}

/// Client for the Anthropic Messages API.
///
/// One pooled connection set shared by all requests. No retries and no
/// request timeout: a slow document analysis is allowed to run to completion.
pub struct AnthropicClient {
    http_client: Client,
    messages_url: String,
    api_version: String,
}

impl AnthropicClient {
    pub fn new(config: &AnthropicConfig, performance: &PerformanceConfig) -> Result<Self> {
        let http_client = Client::builder()
            .pool_max_idle_per_host(performance.connection_pool_size)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http_client,
            messages_url: config.messages_url(),
            api_version: config.api_version.clone(),
        })
    }

    pub fn messages_url(&self) -> &str {
        &self.messages_url
    }

    /// POST `request` to `/v1/messages`.
    ///
    /// Any HTTP status is returned as `Ok`; only transport failures and
    /// non-JSON bodies are errors.
    pub async fn send_messages(
        &self,
        request: &MessagesRequest,
        api_key: &ApiKey,
        beta: Option<&str>,
    ) -> Result<UpstreamResponse> {
        debug!(
            "Calling Messages API: model={}, blocks={}, beta={:?}",
            request.model,
            request.messages.iter().map(|m| m.content.len()).sum::<usize>(),
            beta
        );

        let mut builder = self
            .http_client
            .post(&self.messages_url)
            .header("content-type", "application/json")
            .header("x-api-key", api_key.expose())
            .header("anthropic-version", &self.api_version)
            .json(request);

        if let Some(beta) = beta {
            builder = builder.header("anthropic-beta", beta);
        }

        let response = builder.send().await?;
        let status = response.status();

        let body: Value = response.json().await.map_err(|e| {
            warn!("Messages API returned HTTP {} with a non-JSON body: {}", status, e);
            ProxyError::Http(e)
        })?;

        if !status.is_success() {
            warn!("Messages API error: HTTP {}", status);
        }

        Ok(UpstreamResponse { status, body })
    }
}
