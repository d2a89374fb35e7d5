use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `article-client`.
pub enum ArticleClientError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Требуется авторизация (бэкенд ответил 401/403).
    #[error("authorization required")]
    AuthRequired,

    /// Бэкенд ответил неуспешным статусом или `success: false`.
    #[error("request failed (http status {status}): {message}")]
    RequestFailed {
        /// HTTP-статус ответа.
        status: u16,
        /// Сообщение об ошибке (из тела ответа, если было).
        message: String,
    },

    /// Клиентская валидация полей или файла не прошла; запрос не отправлялся.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Результат операций `article-client`.
pub type ArticleClientResult<T> = Result<T, ArticleClientError>;

impl ArticleClientError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::AuthRequired
            }
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::RequestFailed {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }

    /// `success: false` в теле 2xx-ответа.
    pub(crate) fn from_envelope(status: u16, message: Option<String>) -> Self {
        Self::RequestFailed {
            status,
            message: message.unwrap_or_else(|| "backend reported failure".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_auth_required() {
        let err = ArticleClientError::from_http_status(reqwest::StatusCode::UNAUTHORIZED, None);
        assert!(matches!(err, ArticleClientError::AuthRequired));
    }

    #[test]
    fn other_statuses_map_to_request_failed() {
        let err = ArticleClientError::from_http_status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            Some("boom".to_string()),
        );
        match err {
            ArticleClientError::RequestFailed { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn envelope_failure_keeps_backend_message() {
        let err = ArticleClientError::from_envelope(200, Some("дубликат".to_string()));
        match err {
            ArticleClientError::RequestFailed { status, message } => {
                assert_eq!(status, 200);
                assert_eq!(message, "дубликат");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
