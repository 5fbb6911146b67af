//! Request gateway: URL composition, option merging, and HTTP execution.
//!
//! # Design
//! `Gateway` owns the base URL and a `ureq` agent configured to return
//! 4xx/5xx responses as data rather than `Err`, so status interpretation
//! stays in one place. Every operation funnels through [`Gateway::request`]:
//! merge caller options over defaults, execute, read the body, then either
//! deserialize (2xx) or extract a failure message (anything else). Failures
//! are logged to the `log` facade before they propagate; nothing is retried
//! or swallowed here.

use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::error::ApiError;

/// HTTP method for a request. GET is the default when the caller sets none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

/// Caller-supplied overrides for a single request.
///
/// Merge rule: header entries override the defaults key-by-key
/// (case-insensitively); `method` and `body` override wholesale when set.
/// The only default header is `content-type: application/json`.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<HttpMethod>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Executes HTTP exchanges against the backend.
#[derive(Debug, Clone)]
pub struct Gateway {
    agent: Agent,
    base_url: String,
}

impl Gateway {
    /// `base_url` is the full origin plus any path prefix (e.g.
    /// `https://example.com/api`); a trailing slash is trimmed so endpoint
    /// suffixes can always start with `/`.
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one request and deserialize the success body into `T`.
    ///
    /// `endpoint` is appended verbatim to the base URL. Non-2xx responses
    /// become [`ApiError::Api`] carrying the backend's `message` field when
    /// present; transport-level failures become [`ApiError::Transport`].
    /// Both are logged before returning.
    pub fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let method = options.method.unwrap_or_default();
        let headers = merged_headers(&options.headers);

        let sent = match (method, options.body) {
            (HttpMethod::Get, _) => {
                let mut req = self.agent.get(&url);
                for (name, value) in &headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                req.call()
            }
            (HttpMethod::Delete, _) => {
                let mut req = self.agent.delete(&url);
                for (name, value) in &headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                req.call()
            }
            (HttpMethod::Post, body) => {
                let mut req = self.agent.post(&url);
                for (name, value) in &headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => req.send(body.as_bytes()),
                    None => req.send_empty(),
                }
            }
            (HttpMethod::Put, body) => {
                let mut req = self.agent.put(&url);
                for (name, value) in &headers {
                    req = req.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => req.send(body.as_bytes()),
                    None => req.send_empty(),
                }
            }
        };

        let mut response = match sent {
            Ok(response) => response,
            Err(e) => {
                log::error!("API request failed: {e}");
                return Err(ApiError::Transport(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        let body = match response.body_mut().read_to_string() {
            Ok(body) => body,
            Err(e) => {
                log::error!("API request failed: {e}");
                return Err(ApiError::Transport(e.to_string()));
            }
        };

        if !(200..300).contains(&status) {
            let message = failure_message(status, &body);
            log::error!("API request failed: {message}");
            return Err(ApiError::Api { status, message });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

/// Merge caller headers over the defaults, caller winning key-by-key.
fn merged_headers(caller: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged = vec![("content-type".to_string(), "application/json".to_string())];
    for (name, value) in caller {
        match merged.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some(entry) => entry.1 = value.clone(),
            None => merged.push((name.clone(), value.clone())),
        }
    }
    merged
}

/// Extract a human-readable message from a failed response.
///
/// Prefers the `message` field of a JSON error body; falls back to a
/// generic string embedding the status code when the body is empty,
/// non-JSON, or has no string `message`.
fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}
