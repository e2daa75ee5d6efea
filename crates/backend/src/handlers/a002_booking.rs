use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::a002_booking::aggregate::{BookingConfirmation, BookingForm, BookingRecord};

use crate::domain::a002_booking;
use crate::shared::error::AppError;
use crate::shared::json::AppJson;
use crate::shared::state::AppState;

/// GET /api/bookings
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<BookingRecord>> {
    Json(a002_booking::service::list_all(&state.bookings).await)
}

/// POST /api/bookings
pub async fn submit(
    State(state): State<AppState>,
    AppJson(form): AppJson<BookingForm>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let confirmation =
        a002_booking::service::submit(state.tours.as_ref(), &state.bookings, form).await?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}
