use contracts::dashboards::d400_overview::dto::DashboardSummary;

use crate::domain::a002_booking::repository::BookingRepository;
use crate::domain::a003_feedback::repository::ReviewRepository;

/// Сводка по текущим бронированиям и отзывам
pub async fn summary(bookings: &BookingRepository, reviews: &ReviewRepository) -> DashboardSummary {
    let bookings = bookings.list_all().await;
    let reviews = reviews.list_all().await;
    DashboardSummary::summarize(&bookings, &reviews)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_summary_over_samples() {
        let s = summary(
            &BookingRepository::with_samples(),
            &ReviewRepository::with_samples(),
        )
        .await;
        assert_eq!(s.total_bookings, 7);
        assert_eq!(s.total_revenue, 4886.0);
    }

    #[tokio::test]
    async fn test_summary_empty() {
        let s = summary(&BookingRepository::new(), &ReviewRepository::new()).await;
        assert_eq!(s, DashboardSummary::default());
    }
}
