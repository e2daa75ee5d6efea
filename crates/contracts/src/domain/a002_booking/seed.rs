//! Демонстрационные бронирования для панели агентства и личного кабинета.

use chrono::NaiveDate;
use uuid::Uuid;

use super::aggregate::{BookingId, BookingRecord};
use crate::domain::a001_tour::aggregate::TourId;
use crate::enums::booking_status::BookingStatus;
use crate::enums::payment_status::PaymentStatus;

#[allow(clippy::too_many_arguments)]
fn record(
    n: u128,
    tour_id: i64,
    customer_name: &str,
    email: &str,
    tour: &str,
    date: (i32, u32, u32),
    participants: u32,
    status: BookingStatus,
    payment_status: PaymentStatus,
    total_amount: f64,
) -> BookingRecord {
    BookingRecord {
        id: BookingId(Uuid::from_u128(n)),
        tour_id: TourId(tour_id),
        customer_name: customer_name.into(),
        email: email.into(),
        tour: tour.into(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        participants,
        status,
        payment_status,
        total_amount,
    }
}

pub fn sample_bookings() -> Vec<BookingRecord> {
    use BookingStatus::*;
    vec![
        record(1, 1, "John Smith", "john.smith@example.com", "Paris City Tour", (2025, 6, 15), 2, Confirmed, PaymentStatus::Paid, 398.0),
        record(2, 2, "Sarah Johnson", "sarah.j@example.com", "Tokyo Adventure", (2025, 6, 20), 3, Pending, PaymentStatus::Pending, 897.0),
        record(3, 3, "Michael Chen", "m.chen@example.com", "African Safari", (2025, 7, 5), 2, Confirmed, PaymentStatus::Paid, 998.0),
        record(4, 4, "Emily Davis", "emily.davis@example.com", "Bali Beach Retreat", (2025, 6, 10), 4, Confirmed, PaymentStatus::Pending, 1396.0),
        record(5, 6, "Alex Rodriguez", "alex.r@example.com", "Greek Islands Tour", (2025, 6, 25), 2, Pending, PaymentStatus::Pending, 898.0),
        record(6, 2, "John Doe", "john.doe@example.com", "Tokyo Adventure", (2025, 3, 5), 1, Completed, PaymentStatus::Paid, 299.0),
        record(7, 6, "John Doe", "john.doe@example.com", "Greek Islands Tour", (2025, 8, 15), 1, Cancelled, PaymentStatus::Refunded, 449.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::catalog::TourCatalog;
    use crate::domain::a001_tour::seed::sample_tours;
    use crate::domain::a002_booking::pricing::compute_total;
    use std::collections::HashSet;

    #[test]
    fn test_sample_amounts_match_catalog_prices() {
        let tours = sample_tours();
        for b in sample_bookings() {
            let tour = tours.find_by_id(b.tour_id).expect("tour exists");
            assert_eq!(tour.title, b.tour);
            assert_eq!(compute_total(tour.price, b.participants), b.total_amount);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let bookings = sample_bookings();
        let ids: HashSet<_> = bookings.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), bookings.len());
    }
}
