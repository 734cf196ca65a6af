//! HTTP transport for the Hypixel API
//!
//! The transport is the only place that touches the network. It attaches the
//! `API-Key` header, classifies HTTP status codes into [`ApiError`] variants
//! and decodes the body as JSON. Everything above it works with
//! `serde_json::Value` and typed errors.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "API-Key";

/// Fetches JSON from `<base>/<path>`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET for `path` (relative to the base URL, may include a query).
    ///
    /// When `requires_key` is set and no key is configured this fails with
    /// [`ApiError::MissingCredential`] without making a request.
    async fn get_json(&self, path: &str, requires_key: bool) -> ApiResult<Value>;
}

/// [`Transport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    /// Create a transport with a custom HTTP client
    pub fn with_client(client: Client, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, path: &str, requires_key: bool) -> ApiResult<Value> {
        if requires_key && self.api_key.is_none() {
            return Err(ApiError::MissingCredential {
                endpoint: endpoint_of(path).to_string(),
            });
        }

        let url = self.url(path);
        debug!(%url, with_key = self.api_key.is_some(), "GET");

        let mut request = self.client.get(&url);
        if let Some(ref key) = self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), endpoint_of(path)));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ApiError::malformed(endpoint_of(path), e))
    }
}

/// Strip the query string from a request path.
pub(crate) fn endpoint_of(path: &str) -> &str {
    path.split('?').next().unwrap_or(path)
}

/// Append URL-encoded query parameters to an endpoint path.
pub(crate) fn with_query(endpoint: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{}?{}", endpoint, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let transport = HttpTransport::new("http://localhost:3000/", None);
        assert_eq!(
            transport.url("skyblock/auctions?page=0"),
            "http://localhost:3000/skyblock/auctions?page=0"
        );
        assert_eq!(
            transport.url("/skyblock/bazaar"),
            "http://localhost:3000/skyblock/bazaar"
        );
    }

    #[test]
    fn test_endpoint_of_strips_query() {
        assert_eq!(endpoint_of("skyblock/auctions?page=3"), "skyblock/auctions");
        assert_eq!(endpoint_of("skyblock/bazaar"), "skyblock/bazaar");
    }

    #[test]
    fn test_with_query_encodes_values() {
        assert_eq!(
            with_query("skyblock/auctions", &[("page", "2")]),
            "skyblock/auctions?page=2"
        );
        assert_eq!(
            with_query("skyblock/auction", &[("player", "a b&c")]),
            "skyblock/auction?player=a+b%26c"
        );
        assert_eq!(with_query("skyblock/news", &[]), "skyblock/news");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        // Port 9 (discard) is never contacted: the check happens first.
        let transport = HttpTransport::new("http://127.0.0.1:9", None);
        let err = transport
            .get_json("skyblock/profiles?uuid=abc", true)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingCredential { ref endpoint } if endpoint == "skyblock/profiles"
        ));
    }
}
