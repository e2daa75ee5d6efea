use axum::{extract::State, Json};
use contracts::dashboards::d400_overview::dto::DashboardSummary;

use crate::dashboards::d400_overview;
use crate::shared::state::AppState;

/// GET /api/dashboard/summary
pub async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(d400_overview::service::summary(&state.bookings, &state.reviews).await)
}
