use crate::shared::api_error::{ApiErrorFields, ErrorDetail, STATUS_SUCCESS};
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

/// Ответ на загрузку документа.
///
/// Все поля необязательны: при ошибке backend присылает только `detail`
/// или `error`, а не-JSON ответы сворачиваются клиентом в `{"error": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngestResponse {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    /// Количество извлечённых пунктов договора
    #[serde(
        default,
        deserialize_with = "lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub num_clauses: Option<u64>,

    /// Имя файла, как его увидел сервер
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ErrorDetail>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

impl IngestResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }
}

impl ApiErrorFields for IngestResponse {
    fn detail(&self) -> Option<&ErrorDetail> {
        self.detail.as_ref()
    }

    fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
