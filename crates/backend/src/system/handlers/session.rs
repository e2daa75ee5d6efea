use axum::{extract::State, http::StatusCode, Json};
use contracts::system::session::{LoginForm, RegisterForm, SessionInfo};

use crate::shared::error::AppError;
use crate::shared::json::AppJson;
use crate::shared::state::AppState;
use crate::system::session::service;

/// POST /api/system/session/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(form): AppJson<LoginForm>,
) -> Result<Json<SessionInfo>, AppError> {
    Ok(Json(service::login(&state.sessions, form).await?))
}

/// POST /api/system/session/register
pub async fn register(
    State(state): State<AppState>,
    AppJson(form): AppJson<RegisterForm>,
) -> Result<(StatusCode, Json<SessionInfo>), AppError> {
    let session = service::register(&state.sessions, form).await?;
    Ok((StatusCode::CREATED, Json(session)))
}
