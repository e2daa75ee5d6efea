use contracts::domain::a001_tour::catalog::TourCatalog;
use contracts::domain::a002_booking::aggregate::{
    BookingConfirmation, BookingForm, BookingId, BookingRecord,
};

use super::repository::BookingRepository;
use crate::domain::a001_tour::provider::TourProvider;

/// Принять бронирование.
///
/// Форма проверяется теми же правилами, что и в браузере. Ошибка проверки
/// возвращается как `FailureReason` внутри `anyhow::Error`.
pub async fn submit(
    tours: &dyn TourProvider,
    repo: &BookingRepository,
    form: BookingForm,
) -> anyhow::Result<BookingConfirmation> {
    let catalog = tours.list_all().await?;
    let request = form.validate(&catalog)?;

    let tour = catalog
        .find_by_id(request.tour_id)
        .ok_or_else(|| anyhow::anyhow!("Tour {} disappeared from catalog", request.tour_id))?;

    let confirmation = BookingConfirmation {
        id: BookingId::new_v4(),
        tour_id: tour.id,
        tour_title: tour.title.clone(),
        date: request.selected_date,
        participants: request.participant_count,
        total_price: request.total_price,
        email: form.email.trim().to_string(),
    };

    repo.insert(BookingRecord::from_confirmation(&confirmation, &form.name))
        .await;

    tracing::info!(
        "Booking {} accepted: tour {} on {} x{} = {}",
        confirmation.id.value(),
        confirmation.tour_id,
        confirmation.date,
        confirmation.participants,
        confirmation.total_price
    );
    Ok(confirmation)
}

pub async fn list_all(repo: &BookingRepository) -> Vec<BookingRecord> {
    repo.list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::provider::SeedTourProvider;
    use chrono::NaiveDate;
    use contracts::domain::a001_tour::aggregate::TourId;
    use contracts::enums::booking_status::BookingStatus;
    use contracts::shared::validation::FailureReason;

    fn form() -> BookingForm {
        BookingForm {
            name: "Ann Lee".into(),
            email: " ann@example.com ".into(),
            phone: "123".into(),
            tour_id: Some(TourId(1)),
            date: NaiveDate::from_ymd_opt(2025, 8, 5),
            participants: 3,
            special_requests: Some("Vegetarian meals".into()),
        }
    }

    #[tokio::test]
    async fn test_submit_stores_record() {
        let tours = SeedTourProvider::builtin();
        let repo = BookingRepository::new();

        let confirmation = submit(&tours, &repo, form()).await.unwrap();
        assert_eq!(confirmation.total_price, 597.0);
        assert_eq!(confirmation.tour_title, "Paris City Tour");
        assert_eq!(confirmation.email, "ann@example.com");

        let stored = repo.get_by_id(confirmation.id).await.unwrap();
        assert_eq!(stored.status, BookingStatus::Confirmed);
        assert_eq!(stored.customer_name, "Ann Lee");
    }

    #[tokio::test]
    async fn test_submit_rejects_and_stores_nothing() {
        let tours = SeedTourProvider::builtin();
        let repo = BookingRepository::new();
        let mut bad = form();
        bad.participants = 11;

        let err = submit(&tours, &repo, bad).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<FailureReason>(),
            Some(&FailureReason::InvalidParticipantCount)
        );
        assert!(repo.list_all().await.is_empty());
    }
}
