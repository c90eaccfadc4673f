//! TFE HTTP client for API interactions

use log::debug;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};

/// A single API call, fully resolved from command flags
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to `/api/v2`, or host-absolute when it starts with `/api/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }
}

/// Decoded API response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// A JSON:API document (`data` is an object or an array)
    Document(Value),
    /// 204 or an empty body
    NoContent,
}

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    /// Scheme and host, e.g. `https://app.terraform.io`
    origin: String,
}

impl TfeClient {
    /// Create a new client for a bare hostname or a full URL
    pub fn new(token: String, address: &str) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            origin: normalize_origin(address),
        }
    }

    /// Build the base URL for API requests
    pub fn base_url(&self) -> String {
        format!("{}{}", self.origin, api::BASE_PATH)
    }

    /// Resolve a request path into a full URL
    pub(crate) fn url_for(&self, path: &str) -> String {
        if path.starts_with("/api/") {
            format!("{}{}", self.origin, path)
        } else {
            format!("{}{}", self.base_url(), path)
        }
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::CONTENT_TYPE)
            .header("Accept", api::CONTENT_TYPE)
    }

    /// Execute exactly one API call
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let url = with_query(&self.url_for(&request.path), &request.query);
        debug!("{} {}", request.method, url);

        let mut builder = self.with_headers(self.client.request(request.method.clone(), &url));
        if let Some(body) = &request.body {
            debug!("Request body: {}", body);
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("Response status {} ({} bytes)", status.as_u16(), text.len());

        if !status.is_success() {
            return Err(TfeError::Api {
                status: status.as_u16(),
                message: error_message(&text, &request.method, &request.path),
            });
        }

        if status.as_u16() == 204 || text.trim().is_empty() {
            return Ok(ApiResponse::NoContent);
        }

        Ok(ApiResponse::Document(serde_json::from_str(&text)?))
    }
}

/// Turn `app.terraform.io`, `https://tfe.local/` or `http://127.0.0.1:8080` into an origin
fn normalize_origin(address: &str) -> String {
    let trimmed = address.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Append query parameters, encoding values; keys like `filter[workspace][id]` stay raw
fn with_query(url: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return url.to_string();
    }
    let pairs: Vec<String> = query
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect();
    let separator = if url.contains('?') { "&" } else { "?" };
    format!("{}{}{}", url, separator, pairs.join("&"))
}

/// Extract a readable message from a JSON:API `errors` document
fn error_message(body: &str, method: &Method, path: &str) -> String {
    let details: Vec<String> = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("errors").and_then(Value::as_array).cloned())
        .unwrap_or_default()
        .iter()
        .filter_map(|e| {
            let title = e.get("title").and_then(Value::as_str);
            let detail = e.get("detail").and_then(Value::as_str);
            match (title, detail) {
                (Some(t), Some(d)) => Some(format!("{}: {}", t, d)),
                (Some(t), None) => Some(t.to_string()),
                (None, Some(d)) => Some(d.to_string()),
                (None, None) => None,
            }
        })
        .collect();

    if details.is_empty() {
        format!("{} {} failed", method, path)
    } else {
        details.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url_from_hostname() {
        let client = TfeClient::new("token".to_string(), "app.terraform.io");
        assert_eq!(client.base_url(), "https://app.terraform.io/api/v2");
    }

    #[test]
    fn test_base_url_from_url_with_trailing_slash() {
        let client = TfeClient::new("token".to_string(), "http://127.0.0.1:8080/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/api/v2");
    }

    #[test]
    fn test_url_for_host_absolute_path() {
        let client = TfeClient::new("token".to_string(), "tfe.example.com");
        assert_eq!(
            client.url_for("/api/registry/private/v2/gpg-keys"),
            "https://tfe.example.com/api/registry/private/v2/gpg-keys"
        );
        assert_eq!(
            client.url_for("/workspaces/ws-1"),
            "https://tfe.example.com/api/v2/workspaces/ws-1"
        );
    }

    #[test]
    fn test_with_query_encodes_values() {
        let query = vec![
            ("search[name]".to_string(), "prod app".to_string()),
            ("page[size]".to_string(), "5".to_string()),
        ];
        assert_eq!(
            with_query("https://h/api/v2/workspaces", &query),
            "https://h/api/v2/workspaces?search[name]=prod%20app&page[size]=5"
        );
        assert_eq!(with_query("https://h/x", &[]), "https://h/x");
    }

    #[test]
    fn test_error_message_joins_errors() {
        let body = r#"{"errors":[{"status":"422","title":"invalid attribute","detail":"Name has already been taken"},{"detail":"Email is invalid"}]}"#;
        let msg = error_message(body, &Method::POST, "/organizations");
        assert_eq!(
            msg,
            "invalid attribute: Name has already been taken; Email is invalid"
        );
    }

    #[test]
    fn test_error_message_fallback() {
        let msg = error_message("", &Method::DELETE, "/teams/team-1");
        assert_eq!(msg, "DELETE /teams/team-1 failed");
    }

    #[tokio::test]
    async fn test_send_get_document() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/organizations"))
            .and(query_param("page[number]", "2"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "org-1", "type": "organizations", "attributes": {"name": "acme"}}]
            })))
            .mount(&mock_server)
            .await;

        let client = TfeClient::new("test-token".to_string(), &mock_server.uri());
        let mut request = ApiRequest::new(Method::GET, "/organizations");
        request
            .query
            .push(("page[number]".to_string(), "2".to_string()));

        match client.send(&request).await.unwrap() {
            ApiResponse::Document(doc) => assert_eq!(doc["data"][0]["id"], "org-1"),
            ApiResponse::NoContent => panic!("Expected a document"),
        }
    }

    #[tokio::test]
    async fn test_send_post_body() {
        let mock_server = MockServer::start().await;
        let body = json!({"data": {"type": "teams", "attributes": {"name": "ops"}}});
        Mock::given(method("POST"))
            .and(path("/api/v2/organizations/acme/teams"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": {"id": "team-1", "type": "teams", "attributes": {"name": "ops"}}
            })))
            .mount(&mock_server)
            .await;

        let client = TfeClient::new("t".to_string(), &mock_server.uri());
        let mut request = ApiRequest::new(Method::POST, "/organizations/acme/teams");
        request.body = Some(body);

        let response = client.send(&request).await.unwrap();
        assert!(matches!(response, ApiResponse::Document(_)));
    }

    #[tokio::test]
    async fn test_send_no_content() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v2/teams/team-1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = TfeClient::new("t".to_string(), &mock_server.uri());
        let request = ApiRequest::new(Method::DELETE, "/teams/team-1");
        assert_eq!(client.send(&request).await.unwrap(), ApiResponse::NoContent);
    }

    #[tokio::test]
    async fn test_send_api_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/workspaces/ws-missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{"status": "404", "title": "not found"}]
            })))
            .mount(&mock_server)
            .await;

        let client = TfeClient::new("t".to_string(), &mock_server.uri());
        let request = ApiRequest::new(Method::GET, "/workspaces/ws-missing");
        match client.send(&request).await.unwrap_err() {
            TfeError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("Expected TfeError::Api, got {:?}", other),
        }
    }
}
