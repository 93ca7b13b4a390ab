use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::{config, utils::storage};

use super::types::ApiError;

/// Thin wrapper over the schedule API: base-URL resolution, bearer-token
/// lookup, and success/error payload handling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    token_override: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            token_override: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            token_override: None,
        }
    }

    /// Use a fixed token instead of the localStorage chain. Host tests have
    /// no browser storage, so they inject the token here.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token_override = Some(token.into());
        self
    }

    fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::api_base_url(),
        }
    }

    fn bearer_token(&self) -> Option<String> {
        if let Some(token) = &self.token_override {
            return Some(token.clone());
        }
        storage::stored_bearer_token()
    }

    /// Content type is always sent; Authorization only when a token exists.
    pub(crate) fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.bearer_token() {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    pub(crate) async fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.resolved_base_url(), path);
        debug!("GET {}", path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .headers(self.request_headers())
            .send()
            .await
            .map_err(|e| ApiError::transport(format!("Request failed: {}", e)))?;
        Self::payload_or_error(response).await
    }

    async fn payload_or_error(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        let payload = Self::read_payload(response).await;
        if status.is_success() {
            Ok(payload)
        } else {
            let message = error_message(&payload, status);
            Err(ApiError::http(status.as_u16(), message, payload))
        }
    }

    /// JSON responses parse to a value, with a parse failure degrading to
    /// null; anything else reads as text, with a failure degrading to "".
    async fn read_payload(response: Response) -> Value {
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("application/json"))
            .unwrap_or(false);
        if is_json {
            response.json::<Value>().await.unwrap_or(Value::Null)
        } else {
            Value::String(response.text().await.unwrap_or_default())
        }
    }
}

fn error_message(payload: &Value, status: StatusCode) -> String {
    if let Some(message) = payload.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    if let Some(text) = payload.as_str() {
        if !text.is_empty() {
            return text.to_string();
        }
    }
    format!("HTTP {}", status.as_u16())
}
