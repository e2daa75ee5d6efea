//! JSON-экстрактор с ответом в формате `ApiError`.

use axum::extract::FromRequest;

use crate::shared::error::AppError;

/// Как `axum::Json`, но ошибка разбора тела уходит через `AppError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
