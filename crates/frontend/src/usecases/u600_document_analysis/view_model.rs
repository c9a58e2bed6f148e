//! Document analysis - View Model

use super::controller::UiPort;
use super::presenter::{ResultsView, StatusView};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub const FILE_INPUT_ID: &str = "analyzer-file-input";
pub const QUERY_INPUT_ID: &str = "analyzer-query-input";
pub const RESULTS_SECTION_ID: &str = "analyzer-results";

#[derive(Clone, Copy)]
pub struct AnalyzerVm {
    pub file_label: RwSignal<Option<String>>,
    pub ingest_enabled: RwSignal<bool>,
    pub upload_status: RwSignal<Option<StatusView>>,
    pub drag_over: RwSignal<bool>,
    /// Some(message) while a request is in flight
    pub loading: RwSignal<Option<String>>,
    pub query: RwSignal<String>,
    pub results: RwSignal<Option<ResultsView>>,
}

impl AnalyzerVm {
    pub fn new() -> Self {
        Self {
            file_label: RwSignal::new(None),
            ingest_enabled: RwSignal::new(false),
            upload_status: RwSignal::new(None),
            drag_over: RwSignal::new(false),
            loading: RwSignal::new(None),
            query: RwSignal::new(String::new()),
            results: RwSignal::new(None),
        }
    }
}

impl Default for AnalyzerVm {
    fn default() -> Self {
        Self::new()
    }
}

fn html_element(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

impl UiPort for AnalyzerVm {
    fn show_loading(&self, message: &str) {
        self.loading.set(Some(message.to_string()));
    }

    fn hide_loading(&self) {
        self.loading.set(None);
    }

    fn set_file_label(&self, label: &str) {
        self.file_label.set(Some(label.to_string()));
    }

    fn set_ingest_enabled(&self, enabled: bool) {
        self.ingest_enabled.set(enabled);
    }

    fn set_upload_status(&self, status: Option<StatusView>) {
        self.upload_status.set(status);
    }

    fn set_drag_over(&self, active: bool) {
        self.drag_over.set(active);
    }

    fn open_file_picker(&self) {
        if let Some(input) = html_element(FILE_INPUT_ID) {
            input.click();
        }
    }

    fn query(&self) -> String {
        self.query.get_untracked()
    }

    fn set_query(&self, query: &str) {
        self.query.set(query.to_string());
    }

    fn focus_query(&self) {
        if let Some(input) = html_element(QUERY_INPUT_ID) {
            let _ = input.focus();
        }
    }

    fn hide_results(&self) {
        self.results.set(None);
    }

    fn show_results(&self, results: ResultsView) {
        self.results.set(Some(results));
    }

    fn scroll_results_into_view(&self) {
        // wait for the results section to be rendered
        request_animation_frame(|| {
            if let Some(section) = html_element(RESULTS_SECTION_ID) {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                options.set_block(web_sys::ScrollLogicalPosition::Nearest);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}
