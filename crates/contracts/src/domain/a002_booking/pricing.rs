//! Расчёт стоимости и проверка выбора тура, даты и числа участников.

use chrono::NaiveDate;

use super::aggregate::BookingRequest;
use crate::domain::a001_tour::aggregate::TourId;
use crate::domain::a001_tour::catalog::TourCatalog;
use crate::shared::validation::FailureReason;

/// Минимальное число участников
pub const MIN_PARTICIPANTS: u32 = 1;

/// Максимальное число участников (ограничение формы)
pub const MAX_PARTICIPANTS: u32 = 10;

/// Стоимость бронирования: цена за человека, умноженная на число участников.
///
/// Число участников проверяется до вызова (`validate_participant_count`).
pub fn compute_total(unit_price: f64, participant_count: u32) -> f64 {
    unit_price * f64::from(participant_count)
}

/// Число участников в диапазоне `[1, 10]`
pub fn validate_participant_count(count: i64) -> Result<u32, FailureReason> {
    u32::try_from(count)
        .ok()
        .filter(|c| (MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(c))
        .ok_or(FailureReason::InvalidParticipantCount)
}

/// Проверка выбора перед отправкой.
///
/// Порядок проверок: тур, дата, участники. Возвращается первая ошибка.
pub fn validate_booking<C>(
    catalog: &C,
    tour_id: Option<TourId>,
    selected_date: Option<NaiveDate>,
    participant_count: i64,
) -> Result<BookingRequest, FailureReason>
where
    C: TourCatalog + ?Sized,
{
    let tour = tour_id
        .and_then(|id| catalog.find_by_id(id))
        .ok_or(FailureReason::MissingTour)?;

    let selected_date = selected_date
        .filter(|d| tour.offers_date(*d))
        .ok_or(FailureReason::MissingDate)?;

    let participant_count = validate_participant_count(participant_count)?;

    Ok(BookingRequest {
        tour_id: tour.id,
        selected_date,
        participant_count,
        total_price: compute_total(tour.price, participant_count),
    })
}

/// Варианты числа участников для выпадающего списка и слайдера
pub fn participant_options() -> Vec<u32> {
    (MIN_PARTICIPANTS..=MAX_PARTICIPANTS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::seed::sample_tours;

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    #[test]
    fn test_compute_total() {
        assert_eq!(compute_total(199.0, 3), 597.0);
        assert_eq!(compute_total(0.0, 10), 0.0);
        for n in MIN_PARTICIPANTS..=MAX_PARTICIPANTS {
            assert_eq!(compute_total(449.0, n), 449.0 * n as f64);
        }
    }

    #[test]
    fn test_participant_bounds() {
        assert_eq!(validate_participant_count(1), Ok(1));
        assert_eq!(validate_participant_count(10), Ok(10));
        for bad in [0, -1, 11, i64::MAX, i64::MIN] {
            assert_eq!(
                validate_participant_count(bad),
                Err(FailureReason::InvalidParticipantCount)
            );
        }
    }

    #[test]
    fn test_valid_booking() {
        let tours = sample_tours();
        let request = validate_booking(&tours, Some(TourId(1)), d(2025, 7, 10), 3).unwrap();
        assert_eq!(request.selected_date, d(2025, 7, 10).unwrap());
        assert_eq!(request.total_price, 597.0);
    }

    #[test]
    fn test_missing_tour() {
        let tours = sample_tours();
        assert_eq!(
            validate_booking(&tours, None, d(2025, 7, 10), 2),
            Err(FailureReason::MissingTour)
        );
        assert_eq!(
            validate_booking(&tours, Some(TourId(42)), d(2025, 7, 10), 2),
            Err(FailureReason::MissingTour)
        );
    }

    #[test]
    fn test_date_outside_schedule_is_missing_date_even_when_rest_is_valid() {
        let tours = sample_tours();
        // 2025-06-20 есть у Токио, но не у Парижа
        assert_eq!(
            validate_booking(&tours, Some(TourId(1)), d(2025, 6, 20), 2),
            Err(FailureReason::MissingDate)
        );
        assert_eq!(
            validate_booking(&tours, Some(TourId(1)), None, 2),
            Err(FailureReason::MissingDate)
        );
    }

    #[test]
    fn test_invalid_participant_count_after_tour_and_date() {
        let tours = sample_tours();
        assert_eq!(
            validate_booking(&tours, Some(TourId(2)), d(2025, 6, 20), 0),
            Err(FailureReason::InvalidParticipantCount)
        );
        assert_eq!(
            validate_booking(&tours, Some(TourId(2)), d(2025, 6, 20), 11),
            Err(FailureReason::InvalidParticipantCount)
        );
        // тур проверяется первым
        assert_eq!(
            validate_booking(&tours, None, None, 0),
            Err(FailureReason::MissingTour)
        );
    }

    #[test]
    fn test_works_with_slice_catalog() {
        let tours = sample_tours();
        let only_bali = &tours[3..4];
        assert!(validate_booking(only_bali, Some(TourId(4)), d(2025, 6, 10), 1).is_ok());
        assert_eq!(
            validate_booking(only_bali, Some(TourId(1)), d(2025, 6, 15), 1),
            Err(FailureReason::MissingTour)
        );
    }

    #[test]
    fn test_participant_options() {
        assert_eq!(participant_options(), (1..=10).collect::<Vec<u32>>());
    }
}
