use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::pricing::validate_booking;
use crate::domain::a001_tour::aggregate::TourId;
use crate::domain::a001_tour::catalog::TourCatalog;
use crate::enums::booking_status::BookingStatus;
use crate::enums::payment_status::PaymentStatus;
use crate::shared::validation::{require, validate_email, FailureReason};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор принятого бронирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub Uuid);

impl BookingId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Validated request
// ============================================================================

/// Проверенный запрос на бронирование: тур существует, дата из расписания,
/// число участников в допустимом диапазоне.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(rename = "tourId")]
    pub tour_id: TourId,
    #[serde(rename = "selectedDate")]
    pub selected_date: NaiveDate,
    #[serde(rename = "participantCount")]
    pub participant_count: u32,
    /// `tour.price * participant_count`
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Форма бронирования в том виде, в каком её отправляет браузер
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "tourId", default, deserialize_with = "lenient_option")]
    pub tour_id: Option<TourId>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub participants: i64,
    #[serde(rename = "specialRequests", default)]
    pub special_requests: Option<String>,
}

/// Значение поля формы, которое может прийти в чужом формате
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose<T> {
    Value(T),
    Other(IgnoredAny),
}

/// Пустое или нечитаемое значение считается невыбранным,
/// чтобы ответ был причиной отказа, а не ошибкой разбора тела
fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<Loose<T>>::deserialize(deserializer)? {
        Some(Loose::Value(value)) => Some(value),
        Some(Loose::Other(_)) | None => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Count {
    Int(i64),
    Float(f64),
    Other(IgnoredAny),
}

/// Дробное или нечисловое количество участников превращается в 0:
/// такое значение заведомо не проходит проверку диапазона
fn lenient_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Count::deserialize(deserializer)? {
        Count::Int(n) => n,
        Count::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => f as i64,
        Count::Float(_) | Count::Other(_) => 0,
    })
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            tour_id: None,
            date: None,
            participants: 1,
            special_requests: None,
        }
    }
}

impl BookingForm {
    /// Пустая форма с предвыбранным туром (`/book?tour=<id>`)
    pub fn with_tour(tour_id: Option<TourId>) -> Self {
        Self {
            tour_id,
            ..Self::default()
        }
    }

    /// Выбор другого тура сбрасывает дату: расписания у туров разные
    pub fn select_tour(&mut self, tour_id: Option<TourId>) {
        if self.tour_id != tour_id {
            self.tour_id = tour_id;
            self.date = None;
        }
    }

    /// Полная проверка формы.
    ///
    /// Сначала выбор тура, даты и числа участников, затем контактные поля.
    pub fn validate<C>(&self, catalog: &C) -> Result<BookingRequest, FailureReason>
    where
        C: TourCatalog + ?Sized,
    {
        let request = validate_booking(catalog, self.tour_id, self.date, self.participants)?;
        require("name", &self.name)?;
        validate_email(&self.email)?;
        require("phone", &self.phone)?;
        Ok(request)
    }
}

/// Успешный ответ на отправку формы бронирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub id: BookingId,
    #[serde(rename = "tourId")]
    pub tour_id: TourId,
    #[serde(rename = "tourTitle")]
    pub tour_title: String,
    pub date: NaiveDate,
    pub participants: u32,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
    pub email: String,
}

// ============================================================================
// Booking records (dashboards)
// ============================================================================

/// Бронирование в списках личного кабинета и панели агентства
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: BookingId,
    #[serde(rename = "tourId")]
    pub tour_id: TourId,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    pub email: String,
    pub tour: String,
    pub date: NaiveDate,
    pub participants: u32,
    pub status: BookingStatus,
    #[serde(rename = "paymentStatus")]
    pub payment_status: PaymentStatus,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
}

impl BookingRecord {
    /// Запись для принятого бронирования
    pub fn from_confirmation(confirmation: &BookingConfirmation, customer_name: &str) -> Self {
        Self {
            id: confirmation.id,
            tour_id: confirmation.tour_id,
            customer_name: customer_name.trim().to_string(),
            email: confirmation.email.clone(),
            tour: confirmation.tour_title.clone(),
            date: confirmation.date,
            participants: confirmation.participants,
            status: BookingStatus::Confirmed,
            payment_status: PaymentStatus::Pending,
            total_amount: confirmation.total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::seed::sample_tours;

    fn valid_form() -> BookingForm {
        BookingForm {
            name: "Emily Davis".into(),
            email: "emily@example.com".into(),
            phone: "+1 555 0100".into(),
            tour_id: Some(TourId(4)),
            date: NaiveDate::from_ymd_opt(2025, 7, 20),
            participants: 4,
            special_requests: None,
        }
    }

    #[test]
    fn test_valid_form_produces_request_with_total() {
        let request = valid_form().validate(&sample_tours()).unwrap();
        assert_eq!(request.tour_id, TourId(4));
        assert_eq!(request.participant_count, 4);
        assert_eq!(request.total_price, 1396.0);
    }

    #[test]
    fn test_booking_rules_are_checked_before_contact_fields() {
        let mut form = valid_form();
        form.email = "broken".into();
        form.date = None;
        assert_eq!(form.validate(&sample_tours()), Err(FailureReason::MissingDate));
    }

    #[test]
    fn test_contact_fields() {
        let tours = sample_tours();

        let mut form = valid_form();
        form.name = " ".into();
        assert_eq!(form.validate(&tours), Err(FailureReason::missing("name")));

        let mut form = valid_form();
        form.email = "emily.example.com".into();
        assert_eq!(form.validate(&tours), Err(FailureReason::InvalidEmail));

        let mut form = valid_form();
        form.phone = String::new();
        assert_eq!(form.validate(&tours), Err(FailureReason::missing("phone")));
    }

    #[test]
    fn test_select_tour_resets_date() {
        let mut form = valid_form();
        form.select_tour(Some(TourId(4)));
        assert!(form.date.is_some());
        form.select_tour(Some(TourId(1)));
        assert_eq!(form.tour_id, Some(TourId(1)));
        assert!(form.date.is_none());
    }

    #[test]
    fn test_form_json_shape() {
        let json = r#"{
            "name": "A B", "email": "a@b.io", "phone": "1",
            "tourId": 2, "date": "2025-06-20", "participants": 3
        }"#;
        let form: BookingForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.tour_id, Some(TourId(2)));
        assert_eq!(form.special_requests, None);
        assert_eq!(form.validate(&sample_tours()).unwrap().total_price, 897.0);
    }

    #[test]
    fn test_malformed_values_become_validation_failures() {
        let tours = sample_tours();
        let parse = |extra: &str| -> BookingForm {
            let json = format!(
                r#"{{"name": "A B", "email": "a@b.io", "phone": "1", "tourId": 2, {extra}}}"#
            );
            serde_json::from_str(&json).unwrap()
        };

        let form = parse(r#""date": "2025-06-20", "participants": 2.5"#);
        assert_eq!(form.validate(&tours), Err(FailureReason::InvalidParticipantCount));

        let form = parse(r#""date": "2025-06-20", "participants": "x""#);
        assert_eq!(form.validate(&tours), Err(FailureReason::InvalidParticipantCount));

        let form = parse(r#""date": "", "participants": 2"#);
        assert_eq!(form.date, None);
        assert_eq!(form.validate(&tours), Err(FailureReason::MissingDate));

        let form = parse(r#""date": "2025-06-20", "participants": 3.0"#);
        assert_eq!(form.participants, 3);
        assert!(form.validate(&tours).is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let form: BookingForm =
            serde_json::from_str(r#"{"name": "A", "email": "a@b.io", "phone": "1"}"#).unwrap();
        assert_eq!(form.tour_id, None);
        assert_eq!(form.date, None);
        assert_eq!(form.participants, 0);
        assert_eq!(form.validate(&sample_tours()), Err(FailureReason::MissingTour));
    }
}
