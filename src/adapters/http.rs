use crate::domain::ports::{ConfigProvider, ImageProvider};
use crate::utils::error::{DiscoveryError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.thedogapi.com/v1/images/search";
pub const API_KEY_HEADER: &str = "x-api-key";
pub const API_KEY_ENV: &str = "DOG_API_KEY";

/// [`ImageProvider`] backed by TheDogAPI image search.
#[derive(Clone)]
pub struct DogApiProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl DogApiProvider {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key,
            timeout: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let mut provider = Self::new(config.api_endpoint(), config.api_key().map(str::to_string));
        provider.timeout = config.timeout_seconds().map(Duration::from_secs);
        if provider.api_key.is_none() {
            tracing::warn!(
                "⚠️ No API key configured ({} is unset), requests will be anonymous",
                API_KEY_ENV
            );
        }
        provider
    }
}

impl std::fmt::Debug for DogApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DogApiProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| crate::config::REDACTED))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl ImageProvider for DogApiProvider {
    async fn search(&self) -> Result<serde_json::Value> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("has_breeds", "true")]);

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(DiscoveryError::HttpStatusError {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_search_sends_filter_and_key() {
        let server = MockServer::start();
        let body = serde_json::json!([
            {"url": "https://cdn.example.com/a.jpg", "breeds": [{"name": "Poodle"}]}
        ]);

        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/images/search")
                .query_param("has_breeds", "true")
                .header(API_KEY_HEADER, "secret-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(body.clone());
        });

        let provider = DogApiProvider::new(
            server.url("/v1/images/search"),
            Some("secret-key".to_string()),
        );
        let result = provider.search().await.unwrap();

        api_mock.assert();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_search_without_key() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/search").query_param("has_breeds", "true");
            then.status(200).json_body(serde_json::json!([]));
        });

        let provider = DogApiProvider::new(server.url("/search"), None);
        let result = provider.search().await.unwrap();

        api_mock.assert();
        assert_eq!(result, serde_json::json!([]));
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let provider = DogApiProvider::new(DEFAULT_ENDPOINT, Some("live_SECRET123".to_string()));
        assert!(!format!("{:?}", provider).contains("live_SECRET123"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(429);
        });

        let provider = DogApiProvider::new(server.url("/search"), None);
        let err = provider.search().await.unwrap_err();

        api_mock.assert();
        match err {
            DiscoveryError::HttpStatusError { status, .. } => assert_eq!(status, 429),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).body("<html>oops</html>");
        });

        let provider = DogApiProvider::new(server.url("/search"), None);
        assert!(provider.search().await.is_err());
    }
}
