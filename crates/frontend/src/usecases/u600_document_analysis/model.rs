//! Document analysis - Model (browser transport)

use super::transport::{ClientError, RawResponse, SelectedFile, Transport};
use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;
use web_sys::FormData;

impl SelectedFile<web_sys::File> {
    pub fn from_web_file(file: web_sys::File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            blob: file,
        }
    }
}

/// `fetch`-backed transport rooted at the configured API base
#[derive(Debug, Clone)]
pub struct FetchTransport {
    api_base: String,
}

impl FetchTransport {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

fn network(e: impl std::fmt::Display) -> ClientError {
    ClientError::Network(e.to_string())
}

fn js_error(e: wasm_bindgen::JsValue) -> ClientError {
    ClientError::Network(format!("{e:?}"))
}

async fn read_raw(response: Response) -> Result<RawResponse, ClientError> {
    let status = response.status();
    let status_text = response.status_text();
    let content_type = response.headers().get("content-type");
    let body = response.text().await.map_err(network)?;
    Ok(RawResponse {
        status,
        status_text,
        content_type,
        body,
    })
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    type Blob = web_sys::File;

    async fn post_multipart(
        &self,
        path: &str,
        field: &str,
        file: &SelectedFile<web_sys::File>,
    ) -> Result<RawResponse, ClientError> {
        let form_data = FormData::new().map_err(js_error)?;
        form_data
            .append_with_blob_and_filename(field, &file.blob, &file.name)
            .map_err(js_error)?;

        // no explicit Content-Type: the browser adds the multipart boundary
        let response = Request::post(&api_url(&self.api_base, path))
            .body(form_data)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_raw(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, ClientError> {
        let response = Request::post(&api_url(&self.api_base, path))
            .header("Accept", "application/json")
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_raw(response).await
    }
}
