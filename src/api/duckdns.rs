use super::client::UpdateClient;
use anyhow::{Context, Result};
use async_trait::async_trait;

pub const API_BASE_URL: &str = "https://www.duckdns.org";

pub struct DuckDnsClient {
    client: reqwest::Client,
    base_url: String,
}

#[async_trait]
impl UpdateClient for DuckDnsClient {
    async fn update(&self, name: &str, token: &str) -> Result<String> {
        let response = self
            .client
            .get(self.update_url(name, token))
            .send()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| format!("Error contacting DuckDNS server for {}", name))?;

        response
            .text()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| format!("Error reading body response for {}", name))
    }

    fn update_url(&self, name: &str, token: &str) -> String {
        format!(
            "{}/update?domains={}&token={}&ip=",
            self.base_url, name, token
        )
    }
}

impl DuckDnsClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }
}

impl Default for DuckDnsClient {
    fn default() -> Self {
        Self::new()
    }
}
