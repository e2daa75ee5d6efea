use axum::{routing::get, Router};

use crate::shared::state::AppState;
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SESSION (без проверки учётных данных)
        // ========================================
        .route(
            "/api/system/session/login",
            axum::routing::post(system::handlers::session::login),
        )
        .route(
            "/api/system/session/register",
            axum::routing::post(system::handlers::session::register),
        )
        // ========================================
        // BUSINESS ROUTES
        // ========================================
        // A001 Tours
        .route("/api/tours", get(handlers::a001_tour::list))
        .route("/api/tours/categories", get(handlers::a001_tour::categories))
        .route("/api/tours/:id", get(handlers::a001_tour::get_by_id))
        // A002 Bookings
        .route(
            "/api/bookings",
            get(handlers::a002_booking::list_all).post(handlers::a002_booking::submit),
        )
        // A003 Feedback
        .route(
            "/api/feedback",
            get(handlers::a003_feedback::list).post(handlers::a003_feedback::submit),
        )
        // D400 Overview
        .route(
            "/api/dashboard/summary",
            get(handlers::d400_overview::summary),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::provider::SeedTourProvider;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use contracts::dashboards::d400_overview::dto::DashboardSummary;
    use contracts::domain::a001_tour::aggregate::Tour;
    use contracts::domain::a002_booking::aggregate::BookingConfirmation;
    use contracts::shared::api_error::ApiError;
    use contracts::system::session::SessionInfo;
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        configure_routes(AppState::new(Arc::new(SeedTourProvider::builtin())))
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, json: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
        serde_json::from_slice(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(), get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_tours_filtered_by_query() {
        let (status, body) = send(app(), get_req("/api/tours?q=TOKYO")).await;
        assert_eq!(status, StatusCode::OK);
        let tours: Vec<Tour> = parse(&body);
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].title, "Tokyo Adventure");

        let (_, body) = send(app(), get_req("/api/tours?categories=City,Beach")).await;
        let tours: Vec<Tour> = parse(&body);
        assert_eq!(tours.len(), 4);
    }

    #[tokio::test]
    async fn test_tour_by_id() {
        let (status, body) = send(app(), get_req("/api/tours/3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parse::<Tour>(&body).title, "African Safari");

        let (status, _) = send(app(), get_req("/api/tours/77")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(app(), get_req("/api/tours/abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_categories_route_wins_over_id() {
        let (status, body) = send(app(), get_req("/api/tours/categories")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parse::<Vec<String>>(&body), vec!["City", "Adventure", "Beach"]);
    }

    #[tokio::test]
    async fn test_booking_success_then_listed() {
        let router = app();
        let form = serde_json::json!({
            "name": "Emily Davis",
            "email": "emily@example.com",
            "phone": "+1 555 0100",
            "tourId": 1,
            "date": "2025-07-10",
            "participants": 3
        });
        let (status, body) = send(router.clone(), post_json("/api/bookings", form)).await;
        assert_eq!(status, StatusCode::CREATED);
        let confirmation: BookingConfirmation = parse(&body);
        assert_eq!(confirmation.total_price, 597.0);

        let (_, body) = send(router.clone(), get_req("/api/bookings")).await;
        let records: Vec<serde_json::Value> = parse(&body);
        assert_eq!(records.len(), 8);

        let (_, body) = send(router, get_req("/api/dashboard/summary")).await;
        let summary: DashboardSummary = parse(&body);
        assert_eq!(summary.total_bookings, 8);
        assert_eq!(summary.total_revenue, 4886.0 + 597.0);
    }

    #[tokio::test]
    async fn test_booking_failure_branch() {
        let form = serde_json::json!({
            "name": "Emily Davis",
            "email": "emily@example.com",
            "phone": "1",
            "tourId": 1,
            "date": "2025-06-20",
            "participants": 2
        });
        let (status, body) = send(app(), post_json("/api/bookings", form)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ApiError = parse(&body);
        assert_eq!(error.code, "MISSING_DATE");
        assert_eq!(error.details.as_deref(), Some("date"));
    }

    fn booking_with(date: serde_json::Value, participants: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "name": "Emily Davis",
            "email": "emily@example.com",
            "phone": "1",
            "tourId": 2,
            "date": date,
            "participants": participants
        })
    }

    #[tokio::test]
    async fn test_booking_malformed_participants_is_reason() {
        for participants in [serde_json::json!(2.5), serde_json::json!("x")] {
            let form = booking_with(serde_json::json!("2025-06-20"), participants);
            let (status, body) = send(app(), post_json("/api/bookings", form)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            let error: ApiError = parse(&body);
            assert_eq!(error.code, "INVALID_PARTICIPANT_COUNT");
            assert_eq!(error.details.as_deref(), Some("participants"));
        }
    }

    #[tokio::test]
    async fn test_booking_empty_date_is_reason() {
        let form = booking_with(serde_json::json!(""), serde_json::json!(2));
        let (status, body) = send(app(), post_json("/api/bookings", form)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(parse::<ApiError>(&body).code, "MISSING_DATE");
    }

    #[tokio::test]
    async fn test_unparseable_body_is_api_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/bookings")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse::<ApiError>(&body).code, "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_feedback_rating_required() {
        let form = serde_json::json!({
            "tourName": "Paris City Tour",
            "rating": 0,
            "comment": "Nice"
        });
        let (status, body) = send(app(), post_json("/api/feedback", form)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(parse::<ApiError>(&body).code, "MISSING_RATING");
    }

    #[tokio::test]
    async fn test_register_conflict_and_login_role() {
        let router = app();
        let form = serde_json::json!({
            "full_name": "Sunny Trips",
            "email": "hello@sunny.travel",
            "password": "sunny123",
            "confirm_password": "sunny123",
            "user_type": "agency",
            "agree_to_terms": true
        });
        let (status, _) = send(
            router.clone(),
            post_json("/api/system/session/register", form.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) =
            send(router.clone(), post_json("/api/system/session/register", form)).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let login = serde_json::json!({ "email": "hello@sunny.travel", "password": "x" });
        let (status, body) = send(router, post_json("/api/system/session/login", login)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(parse::<SessionInfo>(&body).is_agency());
    }
}
