use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::a003_feedback::aggregate::{FeedbackForm, Review};

use crate::domain::a003_feedback;
use crate::shared::error::AppError;
use crate::shared::json::AppJson;
use crate::shared::state::AppState;

/// GET /api/feedback
pub async fn list(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(a003_feedback::service::list_recent(&state.reviews).await)
}

/// POST /api/feedback
pub async fn submit(
    State(state): State<AppState>,
    AppJson(form): AppJson<FeedbackForm>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let review = a003_feedback::service::submit(&state.reviews, form).await?;
    Ok((StatusCode::CREATED, Json(review)))
}
