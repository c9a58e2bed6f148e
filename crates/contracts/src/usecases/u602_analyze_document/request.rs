use serde::{Deserialize, Serialize};

/// Запрос на анализ загруженного документа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Вопрос пользователя (уже без пробелов по краям)
    pub query: String,
}

impl AnalyzeRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}
