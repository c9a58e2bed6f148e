pub mod common;
pub mod u601_ingest_document;
pub mod u602_analyze_document;
