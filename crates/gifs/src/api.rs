//! HTTP client for the GIF search endpoint, using [`reqwest`].

use std::time::Duration;

use serde::Deserialize;

/// Default public search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.tenor.com/v1/search";

/// Decoded search response. Only `results` is read; everything else the API
/// returns is ignored.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<serde_json::Value>>,
}

/// Errors from the GIF search API layer.
#[derive(Debug, thiserror::Error)]
pub enum GifSearchError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("GIF API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body was not the expected JSON object.
    #[error("GIF API returned an invalid body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the GIF search API.
pub struct TenorApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TenorApi {
    /// Create a client for `base_url` authenticated with `api_key`.
    ///
    /// Every request is bounded by `timeout`.
    pub fn new(
        base_url: String,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, GifSearchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search for GIFs matching `query`.
    ///
    /// `limit` is forwarded verbatim; the API decides what to do with values
    /// it does not understand.
    pub async fn search(
        &self,
        query: &str,
        limit: &str,
    ) -> Result<SearchResponse, GifSearchError> {
        tracing::debug!(query, limit, "Searching GIFs");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("key", self.api_key.as_str()), ("limit", limit)])
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Return the response unchanged on success, or an
    /// [`GifSearchError::ApiError`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GifSearchError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GifSearchError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};

    use super::*;

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/search")
    }

    fn client(base_url: String) -> TenorApi {
        TenorApi::new(base_url, "test-key".into(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn forwards_query_parameters_and_returns_results() {
        let router = Router::new().route(
            "/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(serde_json::json!({
                    "results": [{ "echo": params }],
                    "next": "0",
                }))
            }),
        );
        let api = client(serve(router).await);

        let response = api.search("cats", "7").await.unwrap();
        let results = response.results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["echo"]["q"], "cats");
        assert_eq!(results[0]["echo"]["key"], "test-key");
        assert_eq!(results[0]["echo"]["limit"], "7");
    }

    #[tokio::test]
    async fn missing_results_key_is_none() {
        let router = Router::new().route(
            "/search",
            get(|| async { Json(serde_json::json!({ "error": "quota" })) }),
        );
        let api = client(serve(router).await);

        let response = api.search("cats", "1").await.unwrap();
        assert!(response.results.is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let router = Router::new().route(
            "/search",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
        );
        let api = client(serve(router).await);

        let err = api.search("cats", "1").await.unwrap_err();
        assert_matches!(
            err,
            GifSearchError::ApiError { status: 503, ref body } if body == "down for maintenance"
        );
    }

    #[tokio::test]
    async fn non_json_body_is_decode_error() {
        let router = Router::new().route("/search", get(|| async { "<html>nope</html>" }));
        let api = client(serve(router).await);

        assert_matches!(api.search("cats", "1").await, Err(GifSearchError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_request_error() {
        // Bind then drop a listener to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = client(format!("http://{addr}/search"));
        assert_matches!(api.search("cats", "1").await, Err(GifSearchError::Request(_)));
    }

    #[test]
    fn api_error_display() {
        let err = GifSearchError::ApiError {
            status: 502,
            body: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "GIF API error (502): bad gateway");
    }
}
