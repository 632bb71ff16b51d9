use std::time::Duration;

use discovery_logging::{discovery_debug, discovery_warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::{DispatchError, FailureKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSettings {
    pub base_url: String,
    pub query_path: String,
    /// Upper bound for the whole exchange; the request is dropped once it elapses.
    pub timeout: Duration,
    /// Sent with every request after `Content-Type: application/json`.
    pub headers: Vec<(String, String)>,
    pub bearer_token: Option<String>,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            base_url: "https://Testserver:5001".to_string(),
            query_path: "/api/query".to_string(),
            timeout: Duration::from_millis(30_000),
            headers: Vec::new(),
            bearer_token: None,
        }
    }
}

impl DispatchSettings {
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.query_path.trim_start_matches('/')
        )
    }
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct QueryResponse {
    response: String,
}

#[async_trait::async_trait]
pub trait QueryDispatcher: Send + Sync {
    /// Sends one query; resolves to the server's response text.
    async fn dispatch(&self, query: &str) -> Result<String, DispatchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestDispatcher {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    timeout: Duration,
}

impl ReqwestDispatcher {
    /// Validates the endpoint and headers up front; nothing is sent yet.
    pub fn new(settings: DispatchSettings) -> Result<Self, DispatchError> {
        let endpoint = reqwest::Url::parse(&settings.endpoint()).map_err(|err| {
            DispatchError::new(
                FailureKind::InvalidConfig,
                format!("invalid endpoint {}: {err}", settings.endpoint()),
            )
        })?;
        let headers = build_headers(&settings)?;

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(settings.timeout)
            .build()
            .map_err(|err| DispatchError::new(FailureKind::InvalidConfig, err.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            timeout: settings.timeout,
        })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    async fn exchange(&self, body: Vec<u8>) -> Result<String, DispatchError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::http_status(status));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: QueryResponse = serde_json::from_slice(&bytes).map_err(|err| {
            DispatchError::new(
                FailureKind::InvalidResponse,
                format!("Invalid response: {err}"),
            )
        })?;
        Ok(parsed.response)
    }
}

#[async_trait::async_trait]
impl QueryDispatcher for ReqwestDispatcher {
    async fn dispatch(&self, query: &str) -> Result<String, DispatchError> {
        let body = serde_json::to_vec(&QueryRequest { query })
            .map_err(|err| DispatchError::new(FailureKind::InvalidConfig, err.to_string()))?;
        discovery_debug!(
            "POST {} query_len={} timeout_ms={}",
            self.endpoint,
            query.len(),
            self.timeout.as_millis()
        );

        // Dropping the exchange future on expiry aborts the in-flight request.
        match tokio::time::timeout(self.timeout, self.exchange(body)).await {
            Ok(result) => result,
            Err(_) => {
                discovery_warn!(
                    "POST {} timed out after {} ms",
                    self.endpoint,
                    self.timeout.as_millis()
                );
                Err(DispatchError::timeout())
            }
        }
    }
}

fn build_headers(settings: &DispatchSettings) -> Result<HeaderMap, DispatchError> {
    let invalid = |what: &str, err: &dyn std::fmt::Display| {
        DispatchError::new(FailureKind::InvalidConfig, format!("invalid {what}: {err}"))
    };

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in &settings.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|err| invalid("header name", &err))?;
        let value = HeaderValue::from_str(value).map_err(|err| invalid("header value", &err))?;
        headers.insert(name, value);
    }
    if let Some(token) = settings.bearer_token.as_deref() {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| invalid("bearer token", &err))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}

fn map_reqwest_error(err: reqwest::Error) -> DispatchError {
    if err.is_timeout() {
        return DispatchError::timeout();
    }
    DispatchError::new(FailureKind::Network, err.to_string())
}
