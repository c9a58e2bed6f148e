//! Recording fakes for the UI and transport seams

use super::controller::UiPort;
use super::presenter::{ResultsView, StatusView};
use super::transport::{ClientError, RawResponse, SelectedFile, Transport};
use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub enum UiCall {
    ShowLoading(String),
    HideLoading,
    FileLabel(String),
    IngestEnabled(bool),
    UploadStatus(Option<StatusView>),
    DragOver(bool),
    OpenPicker,
    SetQuery(String),
    FocusQuery,
    HideResults,
    ShowResults(ResultsView),
    ScrollResults,
}

#[derive(Default)]
pub struct FakeUi {
    calls: RefCell<Vec<UiCall>>,
    query: RefCell<String>,
}

impl FakeUi {
    pub fn calls(&self) -> Vec<UiCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn type_query(&self, text: &str) {
        *self.query.borrow_mut() = text.to_string();
    }

    /// (times shown, times hidden)
    pub fn loading_transitions(&self) -> (usize, usize) {
        let calls = self.calls.borrow();
        let shown = calls
            .iter()
            .filter(|c| matches!(c, UiCall::ShowLoading(_)))
            .count();
        let hidden = calls
            .iter()
            .filter(|c| matches!(c, UiCall::HideLoading))
            .count();
        (shown, hidden)
    }

    pub fn last_upload_status(&self) -> Option<StatusView> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            UiCall::UploadStatus(status) => status.clone(),
            _ => None,
        })
    }

    pub fn last_results(&self) -> Option<ResultsView> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            UiCall::ShowResults(results) => Some(results.clone()),
            _ => None,
        })
    }

    fn record(&self, call: UiCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl UiPort for FakeUi {
    fn show_loading(&self, message: &str) {
        self.record(UiCall::ShowLoading(message.to_string()));
    }
    fn hide_loading(&self) {
        self.record(UiCall::HideLoading);
    }
    fn set_file_label(&self, label: &str) {
        self.record(UiCall::FileLabel(label.to_string()));
    }
    fn set_ingest_enabled(&self, enabled: bool) {
        self.record(UiCall::IngestEnabled(enabled));
    }
    fn set_upload_status(&self, status: Option<StatusView>) {
        self.record(UiCall::UploadStatus(status));
    }
    fn set_drag_over(&self, active: bool) {
        self.record(UiCall::DragOver(active));
    }
    fn open_file_picker(&self) {
        self.record(UiCall::OpenPicker);
    }
    fn query(&self) -> String {
        self.query.borrow().clone()
    }
    fn set_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
        self.record(UiCall::SetQuery(query.to_string()));
    }
    fn focus_query(&self) {
        self.record(UiCall::FocusQuery);
    }
    fn hide_results(&self) {
        self.record(UiCall::HideResults);
    }
    fn show_results(&self, results: ResultsView) {
        self.record(UiCall::ShowResults(results));
    }
    fn scroll_results_into_view(&self) {
        self.record(UiCall::ScrollResults);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Multipart {
        path: String,
        field: String,
        file_name: String,
    },
    Json {
        path: String,
        body: Value,
    },
}

/// Answers requests from a script, in order
#[derive(Default)]
pub struct FakeTransport {
    replies: RefCell<VecDeque<Result<RawResponse, ClientError>>>,
    sent: RefCell<Vec<Sent>>,
}

impl FakeTransport {
    pub fn with_replies(replies: Vec<Result<RawResponse, ClientError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            sent: RefCell::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.borrow().clone()
    }

    fn next_reply(&self) -> Result<RawResponse, ClientError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted reply".into())))
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    type Blob = Vec<u8>;

    async fn post_multipart(
        &self,
        path: &str,
        field: &str,
        file: &SelectedFile<Vec<u8>>,
    ) -> Result<RawResponse, ClientError> {
        self.sent.borrow_mut().push(Sent::Multipart {
            path: path.to_string(),
            field: field.to_string(),
            file_name: file.name.clone(),
        });
        self.next_reply()
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<RawResponse, ClientError> {
        self.sent.borrow_mut().push(Sent::Json {
            path: path.to_string(),
            body: body.clone(),
        });
        self.next_reply()
    }
}

pub fn file(name: &str, size: u64) -> SelectedFile<Vec<u8>> {
    SelectedFile {
        name: name.to_string(),
        size,
        blob: vec![0; 4],
    }
}

pub fn json_response(status: u16, body: Value) -> RawResponse {
    RawResponse {
        status,
        status_text: String::new(),
        content_type: Some("application/json".to_string()),
        body: body.to_string(),
    }
}

pub fn text_response(status: u16, status_text: &str, body: &str) -> RawResponse {
    RawResponse {
        status,
        status_text: status_text.to_string(),
        content_type: Some("text/plain; charset=utf-8".to_string()),
        body: body.to_string(),
    }
}
