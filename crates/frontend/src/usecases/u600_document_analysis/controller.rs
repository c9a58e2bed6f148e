//! Client controller: owns the current selection and drives the two
//! requests against an injected UI and transport.

use super::presenter::{self, ResultsView, StatusView};
use super::transport::{parse_reply, ClientError, Reply, SelectedFile, Transport};
use crate::shared::text_format::AnswerFormat;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_ingest_document::{IngestDocument, IngestResponse, FILE_FIELD};
use contracts::usecases::u602_analyze_document::{
    AnalyzeDocument, AnalyzeRequest, AnalyzeResponse,
};
use std::cell::{Cell, RefCell};

/// Everything the controller can do to the page
pub trait UiPort {
    fn show_loading(&self, message: &str);
    fn hide_loading(&self);

    fn set_file_label(&self, label: &str);
    fn set_ingest_enabled(&self, enabled: bool);
    fn set_upload_status(&self, status: Option<StatusView>);
    fn set_drag_over(&self, active: bool);
    fn open_file_picker(&self);

    fn query(&self) -> String;
    fn set_query(&self, query: &str);
    fn focus_query(&self);

    fn hide_results(&self);
    fn show_results(&self, results: ResultsView);
    fn scroll_results_into_view(&self);
}

pub struct AnalyzerController<U: UiPort, T: Transport> {
    ui: U,
    transport: T,
    format: AnswerFormat,
    selected: RefCell<Option<SelectedFile<T::Blob>>>,
    drag_over: Cell<bool>,
}

impl<U: UiPort, T: Transport> AnalyzerController<U, T> {
    pub fn new(ui: U, transport: T, format: AnswerFormat) -> Self {
        Self {
            ui,
            transport,
            format,
            selected: RefCell::new(None),
            drag_over: Cell::new(false),
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn selected_name(&self) -> Option<String> {
        self.selected.borrow().as_ref().map(|f| f.name.clone())
    }

    /// Replace the current selection. `None` (empty drop, cancelled picker)
    /// leaves everything as it was.
    pub fn select_file(&self, file: Option<SelectedFile<T::Blob>>) {
        let Some(file) = file else {
            return;
        };
        log::debug!("selected {} ({} bytes)", file.name, file.size);

        self.ui
            .set_file_label(&presenter::file_label(&file.name, file.size));
        self.ui.set_ingest_enabled(true);
        self.ui.set_upload_status(None);
        *self.selected.borrow_mut() = Some(file);
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over.get()
    }

    /// `dragover` fires continuously, so only transitions are logged
    pub fn set_drag_over(&self, active: bool) {
        if self.drag_over.replace(active) != active {
            log::debug!("drag over upload area: {}", active);
        }
        self.ui.set_drag_over(active);
    }

    pub fn open_file_picker(&self) {
        self.ui.open_file_picker();
    }

    /// Quick-query buttons only fill the input; the user still submits
    pub fn apply_quick_query(&self, query: &str) {
        self.ui.set_query(query);
        self.ui.focus_query();
    }

    /// Upload the selected file. No-op without a selection.
    pub async fn ingest(&self) {
        // clone out so no borrow is held across the await
        let Some(file) = self.selected.borrow().clone() else {
            log::debug!("ingest requested without a selected file");
            return;
        };

        self.ui.show_loading(presenter::INGEST_LOADING);
        log::info!(
            "{}: uploading {} ({} bytes)",
            IngestDocument::full_name(),
            file.name,
            file.size
        );

        let reply = self.request_ingest(&file).await;
        match &reply {
            Ok(r) if r.ok && r.body.is_success() => log::info!(
                "{}: {} clauses extracted",
                IngestDocument::full_name(),
                r.body.num_clauses.unwrap_or(0)
            ),
            Ok(r) => log::warn!(
                "{}: rejected with HTTP {}",
                IngestDocument::full_name(),
                r.status
            ),
            Err(e) => log::warn!("{}: {}", IngestDocument::full_name(), e),
        }

        self.ui
            .set_upload_status(Some(presenter::ingest_status(&reply, &file.name)));
        self.ui.hide_loading();
    }

    /// Ask a question about the ingested document. A blank query only
    /// returns focus to the input.
    pub async fn analyze(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.ui.focus_query();
            return;
        }

        self.ui.show_loading(presenter::ANALYZE_LOADING);
        self.ui.hide_results();
        log::info!("{}: {:?}", AnalyzeDocument::full_name(), query);

        let reply = self.request_analysis(query).await;
        match &reply {
            Ok(r) if r.ok => log::info!(
                "{}: answered, {} clauses analyzed",
                AnalyzeDocument::full_name(),
                r.body.num_clauses_analyzed.unwrap_or(0)
            ),
            Ok(r) => log::warn!(
                "{}: failed with HTTP {}",
                AnalyzeDocument::full_name(),
                r.status
            ),
            Err(e) => log::warn!("{}: {}", AnalyzeDocument::full_name(), e),
        }

        self.ui
            .show_results(presenter::analysis_results(&reply, self.format));
        self.ui.hide_loading();
        self.ui.scroll_results_into_view();
    }

    /// Analyze whatever is currently typed in the query input
    pub async fn analyze_current_query(&self) {
        let query = self.ui.query();
        self.analyze(&query).await;
    }

    async fn request_ingest(
        &self,
        file: &SelectedFile<T::Blob>,
    ) -> Result<Reply<IngestResponse>, ClientError> {
        let raw = self
            .transport
            .post_multipart(IngestDocument::endpoint(), FILE_FIELD, file)
            .await?;
        parse_reply(&raw)
    }

    async fn request_analysis(&self, query: &str) -> Result<Reply<AnalyzeResponse>, ClientError> {
        let body = serde_json::to_value(AnalyzeRequest::new(query))
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        let raw = self
            .transport
            .post_json(AnalyzeDocument::endpoint(), &body)
            .await?;
        parse_reply(&raw)
    }
}
