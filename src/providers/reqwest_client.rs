use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::debug;

use crate::core::config::ConverterConfig;
use crate::core::http::{HttpClient, HttpResponse};

/// Production [`HttpClient`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ConverterConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(ReqwestClient { client })
    }
}

pub struct ReqwestResponse {
    status: u16,
    inner: Option<reqwest::Response>,
}

#[async_trait]
impl HttpResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.status
    }

    async fn text(&mut self) -> Result<String> {
        let response = self
            .inner
            .take()
            .ok_or_else(|| anyhow!("Response body already consumed"))?;
        Ok(response.text().await?)
    }

    async fn close(&mut self) -> Result<()> {
        // Dropping the response returns its connection to the pool
        self.inner.take();
        Ok(())
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Box<dyn HttpResponse>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        debug!(status = %response.status(), "Received quote response");

        Ok(Box::new(ReqwestResponse {
            status: response.status().as_u16(),
            inner: Some(response),
        }))
    }
}
