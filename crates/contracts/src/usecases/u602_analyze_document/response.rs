use crate::shared::api_error::{ApiErrorFields, ErrorDetail, STATUS_ERROR};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Сводный отчёт по рискам документа
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallReport {
    /// Итоговая оценка риска, 0..=10
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub overall_risk_score: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub high_risk_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub medium_risk_count: Option<u64>,

    #[serde(
        default,
        deserialize_with = "lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub low_risk_count: Option<u64>,
}

/// Ответ на запрос анализа
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    /// Текст ответа с разметкой (`**bold**`, `*italic*` или блоки пунктов)
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub answer: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub overall_report: Option<OverallReport>,

    #[serde(
        default,
        deserialize_with = "lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_clauses_analyzed: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ErrorDetail>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    /// Сервер явно сообщил об ошибке в теле ответа
    pub fn is_failure(&self) -> bool {
        self.status.as_deref() == Some(STATUS_ERROR)
    }
}

impl ApiErrorFields for AnalyzeResponse {
    fn detail(&self) -> Option<&ErrorDetail> {
        self.detail.as_ref()
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
