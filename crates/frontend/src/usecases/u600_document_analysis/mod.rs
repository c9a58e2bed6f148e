//! Document analysis UI Module (MVVM Standard)
//!
//! Structure:
//! - transport.rs: network seam, response parsing, client errors
//! - model.rs: `fetch` transport used in the browser
//! - presenter.rs: pure render decisions (status lines, results, risk strip)
//! - controller.rs: AnalyzerController and the UiPort it drives
//! - events.rs: affordance → handler registry
//! - view_model.rs: AnalyzerVm with RwSignals (implements UiPort)
//! - view.rs: Main component DocumentAnalysisPage

pub mod controller;
pub mod events;
mod model;
pub mod presenter;
pub mod transport;
mod view;
mod view_model;

#[cfg(test)]
mod test_support;

pub use controller::{AnalyzerController, UiPort};
pub use model::FetchTransport;
pub use view::DocumentAnalysisPage;
pub use view_model::AnalyzerVm;
