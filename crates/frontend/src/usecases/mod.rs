pub mod u600_document_analysis;
