use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UpdateClient {
    /// Sends one update for `name` and returns the raw response body.
    async fn update(&self, name: &str, token: &str) -> Result<String>;

    /// The request URL for `name`, used for logging.
    fn update_url(&self, name: &str, token: &str) -> String;
}
