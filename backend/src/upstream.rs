//! Client for the external content-generation service.
//!
//! The studio does no generation itself: briefs and image prompts are
//! forwarded to `<CONTENT_API_URL>/api/...` and the service's status code and
//! JSON body are relayed back unchanged.

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::error::ProxyError;

/// Shared handle on the upstream service. Cloning reuses the connection pool.
#[derive(Debug, Clone)]
pub struct ContentService {
    client: reqwest::Client,
    base_url: Option<String>,
}

/// Status and JSON body received from the upstream service.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

impl ContentService {
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: Option<String>) -> Self {
        Self { client, base_url }
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    /// POSTs `payload` as JSON to `path` on the upstream service.
    pub async fn forward<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<UpstreamReply, ProxyError> {
        let base_url = self.base_url.as_deref().ok_or(ProxyError::NotConfigured)?;
        let url = format!("{}{}", base_url, path);
        debug!("Forwarding request to {}", url);

        let response = self.client.post(&url).json(payload).send().await?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.map_err(|err| {
            warn!("Upstream {} answered {} without a JSON body: {}", url, status, err);
            ProxyError::InvalidUpstreamResponse(status)
        })?;

        Ok(UpstreamReply { status, body })
    }
}
