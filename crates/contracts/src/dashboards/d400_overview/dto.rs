use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a002_booking::aggregate::BookingRecord;
use crate::domain::a003_feedback::aggregate::{average_rating, Review};
use crate::enums::booking_status::BookingStatus;

/// Сводка для вкладки "Overview" панели агентства
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_bookings: usize,
    pub confirmed_bookings: usize,
    pub pending_bookings: usize,
    /// Сумма по всем бронированиям, кроме отменённых
    pub total_revenue: f64,
    /// `None`, пока нет ни одного отзыва
    pub average_rating: Option<f64>,
    pub popularity: Vec<TourPopularity>,
    pub monthly: Vec<MonthlyBookings>,
}

/// Число бронирований по туру
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourPopularity {
    pub name: String,
    pub bookings: usize,
}

/// Бронирования и выручка за месяц поездки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBookings {
    /// Period in format "YYYY-MM"
    pub period: String,
    /// Short label, e.g. "Jun 2025"
    pub label: String,
    pub bookings: usize,
    pub revenue: f64,
}

fn counts_toward_revenue(b: &BookingRecord) -> bool {
    b.status != BookingStatus::Cancelled
}

impl DashboardSummary {
    pub fn summarize(bookings: &[BookingRecord], reviews: &[Review]) -> Self {
        let count = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();
        Self {
            total_bookings: bookings.len(),
            confirmed_bookings: count(BookingStatus::Confirmed),
            pending_bookings: count(BookingStatus::Pending),
            total_revenue: bookings
                .iter()
                .filter(|b| counts_toward_revenue(b))
                .map(|b| b.total_amount)
                .sum(),
            average_rating: average_rating(reviews),
            popularity: tour_popularity(bookings),
            monthly: monthly_bookings(bookings),
        }
    }

    /// Наибольшее значение для масштабирования столбиков
    pub fn max_popularity(&self) -> usize {
        self.popularity.iter().map(|p| p.bookings).max().unwrap_or(0)
    }
}

/// Бронирования по турам в порядке первого появления
pub fn tour_popularity(bookings: &[BookingRecord]) -> Vec<TourPopularity> {
    let mut result: Vec<TourPopularity> = Vec::new();
    for b in bookings {
        match result.iter_mut().find(|p| p.name == b.tour) {
            Some(p) => p.bookings += 1,
            None => result.push(TourPopularity {
                name: b.tour.clone(),
                bookings: 1,
            }),
        }
    }
    result
}

/// Бронирования по месяцам поездки, по возрастанию периода
pub fn monthly_bookings(bookings: &[BookingRecord]) -> Vec<MonthlyBookings> {
    let mut by_month: BTreeMap<(i32, u32), MonthlyBookings> = BTreeMap::new();
    for b in bookings {
        let key = (b.date.year(), b.date.month());
        let entry = by_month.entry(key).or_insert_with(|| MonthlyBookings {
            period: format!("{:04}-{:02}", key.0, key.1),
            label: b.date.format("%b %Y").to_string(),
            bookings: 0,
            revenue: 0.0,
        });
        entry.bookings += 1;
        if counts_toward_revenue(b) {
            entry.revenue += b.total_amount;
        }
    }
    by_month.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_booking::seed::sample_bookings;
    use crate::domain::a003_feedback::seed::sample_reviews;

    #[test]
    fn test_summary_of_samples() {
        let s = DashboardSummary::summarize(&sample_bookings(), &sample_reviews());
        assert_eq!(s.total_bookings, 7);
        assert_eq!(s.confirmed_bookings, 3);
        assert_eq!(s.pending_bookings, 2);
        // 398 + 897 + 998 + 1396 + 898 + 299, отменённое (449) не входит
        assert_eq!(s.total_revenue, 4886.0);
        let avg = s.average_rating.unwrap();
        assert!((avg - 14.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary() {
        let s = DashboardSummary::summarize(&[], &[]);
        assert_eq!(s.total_bookings, 0);
        assert_eq!(s.total_revenue, 0.0);
        assert_eq!(s.average_rating, None);
        assert_eq!(s.max_popularity(), 0);
    }

    #[test]
    fn test_popularity_order() {
        let p = tour_popularity(&sample_bookings());
        assert_eq!(p[0].name, "Paris City Tour");
        assert_eq!(p[1].name, "Tokyo Adventure");
        assert_eq!(p[1].bookings, 2);
        assert_eq!(p.iter().map(|x| x.bookings).sum::<usize>(), 7);
    }

    #[test]
    fn test_monthly_sorted() {
        let m = monthly_bookings(&sample_bookings());
        let periods: Vec<&str> = m.iter().map(|x| x.period.as_str()).collect();
        assert_eq!(periods, vec!["2025-03", "2025-06", "2025-07", "2025-08"]);
        assert_eq!(m[0].label, "Mar 2025");
        let june = &m[1];
        assert_eq!(june.bookings, 4);
        assert_eq!(june.revenue, 398.0 + 897.0 + 1396.0 + 898.0);
        // август: только отменённое бронирование
        assert_eq!(m[3].bookings, 1);
        assert_eq!(m[3].revenue, 0.0);
    }
}
