//! Ошибки HTTP-обработчиков.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::validation::FailureReason;
use thiserror::Error;

use crate::system::session::directory::EmailTaken;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    /// Форма не прошла проверку: 422 с кодом причины
    #[error(transparent)]
    Validation(FailureReason),

    #[error("{0}")]
    Conflict(String),

    /// Тело запроса не разобрано как JSON нужной формы
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error(transparent)]
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Validation(reason) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ApiError::from(reason))
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, ApiError::new("CONFLICT", msg)),
            AppError::InvalidBody { status, message } => {
                (*status, ApiError::new("INVALID_BODY", message))
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("INTERNAL_ERROR", "Internal server error"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<FailureReason> for AppError {
    fn from(reason: FailureReason) -> Self {
        AppError::Validation(reason)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Сервисы возвращают `anyhow::Result`; доменные ошибки достаются обратно
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        let err = match err.downcast::<FailureReason>() {
            Ok(reason) => return AppError::Validation(reason),
            Err(err) => err,
        };
        match err.downcast::<EmailTaken>() {
            Ok(taken) => AppError::Conflict(taken.to_string()),
            Err(err) => AppError::Internal(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(error: AppError) -> (StatusCode, ApiError) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_is_422_with_reason_code() {
        let err: AppError = anyhow::Error::new(FailureReason::InvalidParticipantCount).into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "INVALID_PARTICIPANT_COUNT");
        assert_eq!(body.details.as_deref(), Some("participants"));
    }

    #[tokio::test]
    async fn test_email_taken_is_conflict() {
        let err: AppError = anyhow::Error::new(EmailTaken("a@b.io".into())).into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "CONFLICT");
    }

    #[tokio::test]
    async fn test_other_errors_are_hidden() {
        let err: AppError = anyhow::anyhow!("disk on fire").into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.message.contains("disk"));
    }

    #[tokio::test]
    async fn test_invalid_body_keeps_rejection_status() {
        let err = AppError::InvalidBody {
            status: StatusCode::BAD_REQUEST,
            message: "Failed to parse the request body as JSON".into(),
        };
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "INVALID_BODY");
        assert!(body.message.contains("JSON"));
    }
}
