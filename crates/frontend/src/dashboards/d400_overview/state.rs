//! Расчёты для вкладок личного кабинета, не зависящие от браузера.

use chrono::NaiveDate;
use contracts::domain::a002_booking::aggregate::BookingRecord;
use contracts::enums::booking_status::BookingStatus;
use contracts::enums::payment_status::PaymentStatus;
use contracts::system::session::normalize_email;

/// Бронирования туриста: совпадение e-mail без учёта регистра
pub fn bookings_of(records: &[BookingRecord], email: &str) -> Vec<BookingRecord> {
    let email = normalize_email(email);
    records
        .iter()
        .filter(|b| normalize_email(&b.email) == email)
        .cloned()
        .collect()
}

/// Карточки обзора туриста
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouristCounters {
    pub upcoming: usize,
    pub completed: usize,
    pub cancelled: usize,
}

pub fn tourist_counters(bookings: &[BookingRecord], today: NaiveDate) -> TouristCounters {
    let mut counters = TouristCounters::default();
    for booking in bookings {
        match booking.status {
            BookingStatus::Completed => counters.completed += 1,
            BookingStatus::Cancelled => counters.cancelled += 1,
            BookingStatus::Pending | BookingStatus::Confirmed if booking.date >= today => {
                counters.upcoming += 1
            }
            _ => {}
        }
    }
    counters
}

/// Ближайшие поездки по дате
pub fn upcoming(bookings: &[BookingRecord], today: NaiveDate, limit: usize) -> Vec<BookingRecord> {
    let mut list: Vec<_> = bookings
        .iter()
        .filter(|b| b.status.is_cancellable() && b.date >= today)
        .cloned()
        .collect();
    list.sort_by_key(|b| b.date);
    list.truncate(limit);
    list
}

/// Отмена в кабинете туриста. Оплаченное бронирование уходит в возврат.
pub fn cancel(booking: &mut BookingRecord) -> bool {
    if !booking.status.is_cancellable() {
        return false;
    }
    booking.status = BookingStatus::Cancelled;
    if booking.payment_status == PaymentStatus::Paid {
        booking.payment_status = PaymentStatus::Refunded;
    }
    true
}

/// Ширина столбика диаграммы в процентах
pub fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_booking::seed::sample_bookings;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_bookings_of_ignores_case() {
        let all = sample_bookings();
        let mine = bookings_of(&all, " John.Doe@Example.com");
        assert!(!mine.is_empty());
        assert!(mine.iter().all(|b| b.email == "john.doe@example.com"));
        assert!(bookings_of(&all, "nobody@example.com").is_empty());
    }

    #[test]
    fn test_tourist_counters() {
        let all = sample_bookings();
        let mine = bookings_of(&all, "john.doe@example.com");
        let counters = tourist_counters(&mine, d(2025, 4, 1));
        assert_eq!(counters.completed, 1);
        assert_eq!(counters.cancelled, 1);
        assert_eq!(counters.upcoming + counters.completed + counters.cancelled, mine.len());
    }

    #[test]
    fn test_upcoming_sorted_and_limited() {
        let all = sample_bookings();
        let list = upcoming(&all, d(2025, 1, 1), 2);
        assert!(list.len() <= 2);
        assert!(list.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(list.iter().all(|b| b.status.is_cancellable()));
    }

    #[test]
    fn test_cancel_only_open_bookings() {
        let mut all = sample_bookings();
        let open = all
            .iter_mut()
            .find(|b| b.status == BookingStatus::Confirmed)
            .unwrap();
        assert!(cancel(open));
        assert_eq!(open.status, BookingStatus::Cancelled);
        assert!(!cancel(open));
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(2.0, 4.0), 50.0);
        assert_eq!(bar_percent(1.0, 0.0), 0.0);
        assert_eq!(bar_percent(5.0, 4.0), 100.0);
    }
}
