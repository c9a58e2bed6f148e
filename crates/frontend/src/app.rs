use crate::shared::config::AnalyzerConfig;
use crate::usecases::u600_document_analysis::DocumentAnalysisPage;
use leptos::prelude::*;

#[component]
pub fn App(config: AnalyzerConfig) -> impl IntoView {
    // Provide the configuration to the whole app via context.
    provide_context(config);

    view! {
        <DocumentAnalysisPage />
    }
}

/// Mount the application into `<body>`
pub fn mount(config: AnalyzerConfig) {
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
