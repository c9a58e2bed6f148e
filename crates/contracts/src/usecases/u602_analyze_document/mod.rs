pub mod request;
pub mod response;

pub use request::AnalyzeRequest;
pub use response::{AnalyzeResponse, OverallReport};

use crate::usecases::common::UseCaseMetadata;

pub struct AnalyzeDocument;

impl UseCaseMetadata for AnalyzeDocument {
    fn usecase_index() -> &'static str {
        "u602"
    }

    fn usecase_name() -> &'static str {
        "analyze_document"
    }

    fn display_name() -> &'static str {
        "Risk analysis"
    }

    fn endpoint() -> &'static str {
        "/api/analyze"
    }

    fn description() -> &'static str {
        "Free-text question against the ingested document; returns an answer and an aggregate risk report"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(AnalyzeDocument::full_name(), "u602_analyze_document");
        assert_eq!(AnalyzeDocument::endpoint(), "/api/analyze");
        assert_eq!(AnalyzeDocument::display_name(), "Risk analysis");
        assert!(!AnalyzeDocument::description().is_empty());
    }
}
