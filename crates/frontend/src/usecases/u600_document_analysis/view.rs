//! Document analysis - View Component

use super::controller::AnalyzerController;
use super::events::{wire_events, Affordance, EventRegistry, LocalTask, UiEvent};
use super::model::FetchTransport;
use super::presenter::{ResultsBody, UPLOAD_HINT};
use super::transport::SelectedFile;
use super::view_model::{AnalyzerVm, FILE_INPUT_ID, QUERY_INPUT_ID, RESULTS_SECTION_ID};
use crate::shared::config::AnalyzerConfig;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_ingest_document::IngestDocument;
use contracts::usecases::u602_analyze_document::AnalyzeDocument;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;
use wasm_bindgen::JsCast;

/// (button label, query placed into the input)
const QUICK_QUERIES: &[(&str, &str)] = &[
    ("High risk clauses", "What are the high risk clauses in this document?"),
    ("Termination", "Summarize the termination conditions."),
    ("Liability", "Are there any liability caps or unlimited liabilities?"),
    ("Payments", "List all payment obligations and deadlines."),
];

fn first_file(files: Option<web_sys::FileList>) -> Option<SelectedFile<web_sys::File>> {
    files
        .and_then(|list| list.get(0))
        .map(SelectedFile::from_web_file)
}

#[component]
#[allow(non_snake_case)]
pub fn DocumentAnalysisPage() -> impl IntoView {
    let config = use_context::<AnalyzerConfig>().unwrap_or_default();
    let vm = AnalyzerVm::new();

    let controller = Rc::new(AnalyzerController::new(
        vm,
        FetchTransport::new(config.api.clone()),
        config.format,
    ));
    let registry: EventRegistry<web_sys::File> = wire_events(
        controller,
        Rc::new(|task: LocalTask| wasm_bindgen_futures::spawn_local(task)),
    );
    let registry = StoredValue::new_local(registry);

    let emit = move |affordance: Affordance, event: UiEvent<web_sys::File>| {
        registry.with_value(|r| {
            if !r.emit(affordance, event) {
                leptos::logging::warn!("no handler bound to {:?}", affordance);
            }
        });
    };

    view! {
        <div class="analyzer">
            <header class="analyzer__header">
                <h1>"Legal Document Analyzer"</h1>
                <span class="analyzer__format">
                    {format!("Answer format: {}", config.format.as_str())}
                </span>
            </header>

            // Upload
            <section class="card">
                <h2>{format!("1. {}", IngestDocument::display_name())}</h2>
                <p class="card__hint">{IngestDocument::description()}</p>
                <input
                    id=FILE_INPUT_ID
                    type="file"
                    accept=".pdf,.docx,.txt"
                    style="display: none;"
                    on:change=move |ev| {
                        let input = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                        let file = first_file(input.as_ref().and_then(|i| i.files()));
                        emit(Affordance::FileInput, UiEvent::FileChosen(file));
                        // Clear input so the same file can be chosen again
                        if let Some(input) = input {
                            input.set_value("");
                        }
                    }
                />
                <div
                    class=move || {
                        if vm.drag_over.get() { "upload-area drag-over" } else { "upload-area" }
                    }
                    on:click=move |_| emit(Affordance::UploadArea, UiEvent::Click)
                    on:dragover=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        emit(Affordance::UploadArea, UiEvent::DragEnter);
                    }
                    on:dragleave=move |_| emit(Affordance::UploadArea, UiEvent::DragLeave)
                    on:drop=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        let file = first_file(ev.data_transfer().and_then(|dt| dt.files()));
                        emit(Affordance::UploadArea, UiEvent::Drop(file));
                    }
                >
                    {icon("upload")}
                    <div class="upload-text">
                        {move || match vm.file_label.get() {
                            Some(label) => {
                                view! { <span><strong>{label}</strong>" selected"</span> }.into_any()
                            }
                            None => view! { <span>{UPLOAD_HINT}</span> }.into_any(),
                        }}
                    </div>
                </div>

                <Flex align=FlexAlign::Center style="gap: 12px; margin-top: 12px;">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || !vm.ingest_enabled.get())
                        on_click=move |_| emit(Affordance::IngestButton, UiEvent::Click)
                    >
                        {icon("document")}
                        " Ingest"
                    </Button>
                    {move || {
                        vm.upload_status
                            .get()
                            .map(|status| {
                                view! { <div class=status.tone.css_class()>{status.text}</div> }
                            })
                    }}
                </Flex>
            </section>

            // Query
            <section class="card">
                <h2>{format!("2. {}", AnalyzeDocument::display_name())}</h2>
                <p class="card__hint">{AnalyzeDocument::description()}</p>
                <textarea
                    id=QUERY_INPUT_ID
                    class="query-input"
                    rows="3"
                    placeholder="Ask a question about the document... (Ctrl+Enter to analyze)"
                    prop:value=move || vm.query.get()
                    on:input=move |ev| vm.query.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        let event = UiEvent::KeyDown {
                            key: ev.key(),
                            ctrl: ev.ctrl_key(),
                            meta: ev.meta_key(),
                        };
                        if event.is_submit_shortcut() {
                            ev.prevent_default();
                        }
                        emit(Affordance::QueryInput, event);
                    }
                ></textarea>

                <Flex style="gap: 8px; flex-wrap: wrap; margin-top: 8px;">
                    {QUICK_QUERIES
                        .iter()
                        .copied()
                        .map(|(label, query)| {
                            view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=ButtonAppearance::Secondary
                                    on_click=move |_| {
                                        emit(Affordance::QuickQuery, UiEvent::QuickQuery(query.to_string()))
                                    }
                                >
                                    {label}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Flex>

                <div style="margin-top: 12px;">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| emit(Affordance::AnalyzeButton, UiEvent::Click)
                    >
                        {icon("search")}
                        " Analyze"
                    </Button>
                </div>
            </section>

            // Results
            <Show when=move || vm.results.with(|r| r.is_some())>
                <section id=RESULTS_SECTION_ID class="card results-section">
                    <h2>"Analysis"</h2>
                    {move || {
                        vm.results
                            .get()
                            .and_then(|r| r.risk_summary)
                            .map(|s| {
                                view! {
                                    <div class="risk-summary">
                                        <div class="risk-summary__item risk-summary__score">
                                            <span class="risk-summary__label">"Overall risk"</span>
                                            <strong>{s.score_text}</strong>
                                        </div>
                                        <div class="risk-summary__item risk-high">
                                            <span class="risk-summary__label">"High"</span>
                                            <strong>{s.high.to_string()}</strong>
                                        </div>
                                        <div class="risk-summary__item risk-medium">
                                            <span class="risk-summary__label">"Medium"</span>
                                            <strong>{s.medium.to_string()}</strong>
                                        </div>
                                        <div class="risk-summary__item risk-low">
                                            <span class="risk-summary__label">"Low"</span>
                                            <strong>{s.low.to_string()}</strong>
                                        </div>
                                        <div class="risk-summary__item">
                                            <span class="risk-summary__label">"Clauses analyzed"</span>
                                            <strong>{s.clauses_analyzed.to_string()}</strong>
                                        </div>
                                    </div>
                                }
                            })
                    }}
                    {move || {
                        vm.results
                            .get()
                            .map(|r| match r.body {
                                ResultsBody::Answer { html } => {
                                    view! { <div class="results-content" inner_html=html></div> }
                                        .into_any()
                                }
                                ResultsBody::Failure { message } => {
                                    view! {
                                        <div class="results-content results-content--error">
                                            {icon("alert")}
                                            " "
                                            {message}
                                        </div>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </section>
            </Show>

            // Loading overlay
            <Show when=move || vm.loading.with(|l| l.is_some())>
                <div class="loading-overlay active">
                    <Flex vertical=true align=FlexAlign::Center style="gap: 12px;">
                        <Spinner />
                        <span>{move || vm.loading.get().unwrap_or_default()}</span>
                    </Flex>
                </div>
            </Show>
        </div>
    }
}
