use axum::{
    extract::{Path, Query, State},
    Json,
};
use contracts::domain::a001_tour::aggregate::{Tour, TourId};
use contracts::domain::a001_tour::filter::TourQuery;
use contracts::domain::common::AggregateId;

use crate::domain::a001_tour;
use crate::shared::error::AppError;
use crate::shared::state::AppState;

/// GET /api/tours?q=&categories=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TourQuery>,
) -> Result<Json<Vec<Tour>>, AppError> {
    Ok(Json(a001_tour::service::list(state.tours.as_ref(), &query).await?))
}

/// GET /api/tours/categories
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(a001_tour::service::categories(state.tours.as_ref()).await?))
}

/// GET /api/tours/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Tour>, AppError> {
    let id = TourId::from_string(&id).map_err(AppError::BadRequest)?;
    match a001_tour::service::get_by_id(state.tours.as_ref(), id).await? {
        Some(tour) => Ok(Json(tour)),
        None => Err(AppError::NotFound(format!("Tour {} not found", id))),
    }
}
