//! Shared HTTP client for catalog fetches.

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Thin wrapper over a shared [`reqwest::Client`].
///
/// Cloning is cheap; every clone reuses the same connection pool. The
/// request timeout is sized for the catalog hosts, where a whole volume
/// arrives as one large text page.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Arc<Client>,
}

impl HttpClient {
    /// Client identified by the crate name and version.
    pub fn new() -> Self {
        Self::with_user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
    }

    /// Client with a caller-chosen user agent string.
    pub fn with_user_agent(user_agent: &str) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client: Arc::new(client),
        }
    }

    /// Start a GET request.
    pub fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client.get(url)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_requests_carry_the_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cce/")
            .match_header("user-agent", "cce-search-test/0.1")
            .with_body("ok")
            .create_async()
            .await;

        let client = HttpClient::with_user_agent("cce-search-test/0.1");
        let response = client
            .get(&format!("{}/cce/", server.url()))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        mock.assert_async().await;
    }

    #[test]
    fn test_clones_share_one_pool() {
        let client = HttpClient::new();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.client, &clone.client));
    }
}
