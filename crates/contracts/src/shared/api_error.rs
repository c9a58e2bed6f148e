use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Значение поля `status`, которым backend подтверждает успешную операцию
pub const STATUS_SUCCESS: &str = "success";

/// Значение поля `status` для ошибок, которые backend вернул с телом JSON
pub const STATUS_ERROR: &str = "error";

/// Поле `detail` из ответа backend.
///
/// Обычно это строка, но ошибки валидации запроса приходят списком объектов
/// вида `{"loc": [...], "msg": "...", "type": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Text(String),
    Structured(Value),
}

impl ErrorDetail {
    /// Человекочитаемый текст ошибки
    pub fn to_message(&self) -> String {
        match self {
            ErrorDetail::Text(text) => text.clone(),
            ErrorDetail::Structured(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.get("msg")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| item.to_string())
                })
                .collect::<Vec<_>>()
                .join("; "),
            ErrorDetail::Structured(other) => other.to_string(),
        }
    }
}

/// Общие поля ошибки, которые может содержать любой ответ API
pub trait ApiErrorFields {
    fn detail(&self) -> Option<&ErrorDetail>;
    fn error(&self) -> Option<&str>;

    /// Первая непустая причина ошибки: сначала `detail`, затем `error`
    fn server_reason(&self) -> Option<String> {
        self.detail()
            .map(ErrorDetail::to_message)
            .filter(|msg| !msg.is_empty())
            .or_else(|| {
                self.error()
                    .filter(|msg| !msg.is_empty())
                    .map(str::to_string)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Body {
        detail: Option<ErrorDetail>,
        error: Option<String>,
    }

    impl ApiErrorFields for Body {
        fn detail(&self) -> Option<&ErrorDetail> {
            self.detail.as_ref()
        }
        fn error(&self) -> Option<&str> {
            self.error.as_deref()
        }
    }

    #[test]
    fn test_detail_wins_over_error() {
        let body = Body {
            detail: Some(ErrorDetail::Text("bad file".into())),
            error: Some("ignored".into()),
        };
        assert_eq!(body.server_reason().as_deref(), Some("bad file"));
    }

    #[test]
    fn test_empty_detail_falls_back_to_error() {
        let body = Body {
            detail: Some(ErrorDetail::Text(String::new())),
            error: Some("Internal Server Error".into()),
        };
        assert_eq!(body.server_reason().as_deref(), Some("Internal Server Error"));

        let empty = Body {
            detail: None,
            error: Some(String::new()),
        };
        assert_eq!(empty.server_reason(), None);
    }

    #[test]
    fn test_validation_detail_list_is_joined() {
        let detail: ErrorDetail = serde_json::from_value(json!([
            {"loc": ["body", "query"], "msg": "Field required", "type": "missing"},
            {"loc": ["body"], "msg": "Input should be a valid dictionary", "type": "dict_type"}
        ]))
        .unwrap();
        assert_eq!(
            detail.to_message(),
            "Field required; Input should be a valid dictionary"
        );
    }

    #[test]
    fn test_structured_detail_without_msg() {
        let detail: ErrorDetail = serde_json::from_value(json!({"code": 42})).unwrap();
        assert_eq!(detail.to_message(), r#"{"code":42}"#);
    }
}
