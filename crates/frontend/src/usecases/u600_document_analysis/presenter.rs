//! Pure "what to show" decisions. Nothing here touches the DOM; the view
//! model applies these values to signals.

use super::transport::{ClientError, Reply};
use crate::shared::number_format::{format_bytes, format_score};
use crate::shared::text_format::AnswerFormat;
use contracts::shared::ApiErrorFields;
use contracts::usecases::u601_ingest_document::IngestResponse;
use contracts::usecases::u602_analyze_document::{AnalyzeResponse, OverallReport};

pub const INGEST_LOADING: &str = "Ingesting…";
pub const ANALYZE_LOADING: &str = "Analyzing…";
pub const FALLBACK_REASON: &str = "request failed";
pub const NO_ANSWER: &str = "No answer returned.";
pub const UPLOAD_HINT: &str = "Drop a PDF, DOCX or TXT file here, or click to browse";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "status-message success",
            Tone::Error => "status-message error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub text: String,
    pub tone: Tone,
}

impl StatusView {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    pub fn error(reason: impl AsRef<str>) -> Self {
        Self {
            text: format!("Error: {}", reason.as_ref()),
            tone: Tone::Error,
        }
    }
}

/// Risk strip numbers, already defaulted for display
#[derive(Debug, Clone, PartialEq)]
pub struct RiskSummary {
    /// e.g. "8/10"
    pub score_text: String,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub clauses_analyzed: u64,
}

impl RiskSummary {
    pub fn from_report(report: &OverallReport, clauses_analyzed: Option<u64>) -> Self {
        Self {
            score_text: format!(
                "{}/10",
                format_score(report.overall_risk_score.unwrap_or(0.0))
            ),
            high: report.high_risk_count.unwrap_or(0),
            medium: report.medium_risk_count.unwrap_or(0),
            low: report.low_risk_count.unwrap_or(0),
            clauses_analyzed: clauses_analyzed.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsBody {
    /// Formatted answer, safe to assign as inner HTML
    Answer { html: String },
    /// Plain-text failure reason
    Failure { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub body: ResultsBody,
    pub risk_summary: Option<RiskSummary>,
}

/// `contract.pdf (1.5 MB)`
pub fn file_label(name: &str, size: u64) -> String {
    format!("{} ({})", name, format_bytes(size))
}

/// Precedence: `detail`, `error`, then the generic fallback
fn server_failure_reason(body: &impl ApiErrorFields) -> String {
    body.server_reason()
        .unwrap_or_else(|| FALLBACK_REASON.to_string())
}

pub fn ingest_status(
    reply: &Result<Reply<IngestResponse>, ClientError>,
    selected_name: &str,
) -> StatusView {
    match reply {
        Ok(reply) if reply.ok && reply.body.is_success() => {
            let clauses = reply.body.num_clauses.unwrap_or(0);
            let filename = reply.body.filename.as_deref().unwrap_or(selected_name);
            StatusView::success(format!(
                "Done: processed {} clauses from {}",
                clauses, filename
            ))
        }
        Ok(reply) => StatusView::error(server_failure_reason(&reply.body)),
        Err(e) => StatusView::error(e.to_string()),
    }
}

pub fn analysis_results(
    reply: &Result<Reply<AnalyzeResponse>, ClientError>,
    format: AnswerFormat,
) -> ResultsView {
    match reply {
        Ok(reply) if reply.ok && !reply.body.is_failure() => {
            let answer = reply
                .body
                .answer
                .as_deref()
                .filter(|a| !a.trim().is_empty())
                .unwrap_or(NO_ANSWER);
            ResultsView {
                body: ResultsBody::Answer {
                    html: format.render(answer),
                },
                risk_summary: reply
                    .body
                    .overall_report
                    .as_ref()
                    .map(|r| RiskSummary::from_report(r, reply.body.num_clauses_analyzed)),
            }
        }
        Ok(reply) => ResultsView {
            body: ResultsBody::Failure {
                message: server_failure_reason(&reply.body),
            },
            risk_summary: None,
        },
        Err(e) => ResultsView {
            body: ResultsBody::Failure {
                message: e.to_string(),
            },
            risk_summary: None,
        },
    }
}
