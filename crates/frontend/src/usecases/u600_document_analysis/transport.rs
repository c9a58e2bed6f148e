//! Network seam of the analyzer: what the controller needs from `fetch`,
//! and the uniform interpretation of whatever comes back.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

/// Failures of the request itself, as opposed to errors the server reports
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("network error: malformed response: {0}")]
    MalformedResponse(String),

    #[error("could not encode request: {0}")]
    Encode(String),
}

/// Document chosen by the user. `blob` is whatever the transport uploads
/// (`web_sys::File` in the browser).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<B> {
    pub name: String,
    pub size: u64,
    pub blob: B,
}

/// Response as received, before any interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parsed response: HTTP success flag plus a typed body
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub ok: bool,
    pub status: u16,
    pub body: T,
}

#[async_trait(?Send)]
pub trait Transport {
    type Blob: Clone;

    /// POST `file` as a single multipart field
    async fn post_multipart(
        &self,
        path: &str,
        field: &str,
        file: &SelectedFile<Self::Blob>,
    ) -> Result<RawResponse, ClientError>;

    /// POST a JSON document
    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, ClientError>;
}

/// JSON bodies are parsed; anything else becomes `{"error": <text>}`, using
/// the status line when the body is empty.
pub fn parse_response(raw: &RawResponse) -> Result<Value, ClientError> {
    let is_json = raw
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));

    if is_json {
        return serde_json::from_str(&raw.body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()));
    }

    let text = if raw.body.trim().is_empty() {
        raw.status_text.clone()
    } else {
        raw.body.clone()
    };
    Ok(json!({ "error": text }))
}

/// [`parse_response`] followed by conversion into the endpoint's DTO
pub fn parse_reply<T: DeserializeOwned>(raw: &RawResponse) -> Result<Reply<T>, ClientError> {
    let value = parse_response(raw)?;
    let body =
        serde_json::from_value(value).map_err(|e| ClientError::MalformedResponse(e.to_string()))?;
    Ok(Reply {
        ok: raw.ok(),
        status: raw.status,
        body,
    })
}
