//! HTTP transport: one exchange against the configured origin.
//!
//! Two entry points: [`Transport::request`] for JSON calls and
//! [`Transport::upload`] for multipart file uploads. Both normalize
//! responses with the same rules:
//!
//! - The response body is decoded as JSON; a body that is not valid JSON
//!   is treated as the empty object `{}` on BOTH the success and error
//!   paths. A malformed 2xx body therefore resolves successfully to `{}`.
//! - A non-2xx status becomes [`ClientError::Api`] carrying the status,
//!   the decoded body as `details`, and a message taken from the body's
//!   `detail` field when present.
//! - Connection-level failures pass through as [`ClientError::Http`],
//!   logged but never translated.
//!
//! Cookies are forwarded on every request; the transport performs no
//! retries and holds no cache.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result, GENERIC_ERROR_MESSAGE};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response};
use serde_json::Value;

/// HTTP transport bound to a single base origin.
pub struct Transport {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Transport {
    /// Create a new transport with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("playground-client")),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Perform an HTTP request with an optional JSON body.
    ///
    /// `path` must begin with `/` and is appended to the base URL.
    pub async fn request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Value>
    where
        B: serde::Serialize,
    {
        let url = self.join(path)?;
        let start = std::time::Instant::now();

        tracing::debug!(method = %method, path = %path, "Sending request");

        let mut request = self.http.request(method.clone(), &url);
        if let Some(b) = body {
            request = request.body(serde_json::to_vec(b)?);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(method = %method, path = %path, error = %e, "Request failed to complete");
            e
        })?;

        self.decode(method, path, start, response).await
    }

    /// Upload a file via multipart `POST`.
    ///
    /// The file bytes are sent as a part named `file`. When `metadata` is
    /// non-empty it is JSON-serialized into a part named `metadata`; an
    /// empty map produces no metadata part at all.
    pub async fn upload(
        &self,
        path: &str,
        file_name: &str,
        contents: Vec<u8>,
        metadata: serde_json::Map<String, Value>,
    ) -> Result<Value> {
        let url = self.join(path)?;
        let start = std::time::Instant::now();

        tracing::debug!(
            path = %path,
            file_name = %file_name,
            size = contents.len(),
            "Uploading file"
        );

        let mut form = Form::new().part("file", Part::bytes(contents).file_name(file_name.to_string()));
        if !metadata.is_empty() {
            form = form.text("metadata", serde_json::to_string(&metadata)?);
        }

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(path = %path, error = %e, "Upload failed to complete");
                e
            })?;

        self.decode(Method::POST, path, start, response).await
    }

    fn join(&self, path: &str) -> Result<String> {
        if !path.starts_with('/') {
            return Err(ClientError::InvalidUrl(format!(
                "endpoint must start with '/': {}",
                path
            )));
        }
        Ok(format!("{}{}", self.config.base_url, path))
    }

    /// Decode a response into JSON, applying the shared success/error rules.
    async fn decode(
        &self,
        method: Method,
        path: &str,
        start: std::time::Instant,
        response: Response,
    ) -> Result<Value> {
        let status = response.status();

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(method = %method, path = %path, error = %e, "Failed to read response body");
            e
        })?;

        // Unparseable bodies collapse to {} on both paths
        let data: Value = serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        let duration = start.elapsed();

        if status.is_success() {
            tracing::debug!(
                method = %method,
                path = %path,
                status = %status.as_u16(),
                duration_ms = %duration.as_millis(),
                "Received response"
            );
            Ok(data)
        } else {
            let message = data
                .get("detail")
                .and_then(|d| d.as_str())
                .map(String::from)
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

            tracing::warn!(
                method = %method,
                path = %path,
                status = %status.as_u16(),
                duration_ms = %duration.as_millis(),
                error = %message,
                "Request failed"
            );

            Err(ClientError::Api {
                status: status.as_u16(),
                message,
                details: data,
            })
        }
    }
}
