pub mod response;

pub use response::IngestResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct IngestDocument;

impl UseCaseMetadata for IngestDocument {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "ingest_document"
    }

    fn display_name() -> &'static str {
        "Document ingestion"
    }

    fn endpoint() -> &'static str {
        "/api/ingest"
    }

    fn description() -> &'static str {
        "Multipart upload of a PDF, DOCX or TXT file; the server splits it into clauses and indexes them"
    }
}

/// Имя multipart-поля с содержимым документа
pub const FILE_FIELD: &str = "file";
