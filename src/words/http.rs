use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::error::WordSourceError;
use super::source::{classify_response, WordSource};

/// Default public endpoint; asks for exactly one word.
pub const DEFAULT_ENDPOINT: &str = "https://random-word-api.vercel.app/api?words=1";

/// Word source backed by the Random Words HTTP API.
pub struct HttpWordSource {
    client: Client,
    endpoint: String,
}

impl HttpWordSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    async fn fetch_word(&self) -> Result<String, WordSourceError> {
        debug!(endpoint = %self.endpoint, "requesting word");

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(status, bytes = body.len(), "word source responded");
        classify_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_endpoint() {
        let source = HttpWordSource::new(DEFAULT_ENDPOINT, Duration::from_secs(10)).unwrap();
        assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 on localhost is the discard port; nothing should be listening.
        let source =
            HttpWordSource::new("http://127.0.0.1:9/api?words=1", Duration::from_secs(2)).unwrap();
        let result = source.fetch_word().await;
        assert!(matches!(result, Err(WordSourceError::Transport(_))));
    }
}
