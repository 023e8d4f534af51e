//! HTTP capability used by the fetcher.
//!
//! The fetcher never reaches for a global client. Callers build one
//! ([`ReqwestClient`] in production, a fake in tests) and pass it in.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use super::RouteFailure;
use crate::error::Result;
use crate::options::Options;

/// A settled HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Raw `Content-Type` header value, if any.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Generic HTTP GET with caller-supplied headers.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request. Non-success statuses are returned as responses,
    /// only transport problems are errors.
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> std::result::Result<HttpResponse, RouteFailure>;
}

/// [`HttpClient`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    /// Build a client with the user agent and timeout from `options`.
    pub fn new(options: &Options) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.route_timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest` client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> std::result::Result<HttpResponse, RouteFailure> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, content_type, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::ResponseDecoding;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_returns_body_and_content_type() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/proxy"))
            .and(query_param("quest", "https://example.com/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("<title>Hi</title>", "text/html; charset=utf-8"),
            )
            .mount(&mock_server)
            .await;

        let client = ReqwestClient::new(&Options::default()).expect("client");
        let url = format!("{}/proxy?quest=https%3A%2F%2Fexample.com%2F", mock_server.uri());
        let response = client
            .get(&url, &[("Accept", "application/json, text/plain, */*")])
            .await
            .expect("response");

        assert!(response.is_success());
        assert_eq!(response.content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert_eq!(response.body, b"<title>Hi</title>");
    }

    #[tokio::test]
    async fn test_response_charset_reaches_decoder() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(b"<title>Caf\xe9</title>".to_vec(), "text/html; charset=windows-1252"),
            )
            .mount(&mock_server)
            .await;

        let client = ReqwestClient::new(&Options::default()).expect("client");
        let response = client.get(&mock_server.uri(), &[]).await.expect("response");
        let content = ResponseDecoding::RawText.decode(&response).expect("content");

        assert_eq!(response.content_type.as_deref(), Some("text/html; charset=windows-1252"));
        assert_eq!(content, "<title>Caf\u{e9}</title>");
    }

    #[tokio::test]
    async fn test_get_passes_error_status_through() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = ReqwestClient::new(&Options::default()).expect("client");
        let response = client.get(&mock_server.uri(), &[]).await.expect("response");

        assert_eq!(response.status, 503);
        assert!(!response.is_success());
    }
}
