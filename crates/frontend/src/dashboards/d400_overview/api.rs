use contracts::dashboards::d400_overview::dto::DashboardSummary;
use contracts::domain::a002_booking::aggregate::BookingRecord;

use crate::shared::api_utils::get_json;

/// Сводка для обзора панели агентства
pub async fn get_summary() -> Result<DashboardSummary, String> {
    get_json("/api/dashboard/summary").await
}

/// Все бронирования (агентство видит все, турист фильтрует по своему e-mail)
pub async fn get_bookings() -> Result<Vec<BookingRecord>, String> {
    get_json("/api/bookings").await
}
