use chrono::NaiveDate;
use contracts::domain::a001_tour::aggregate::TourId;
use contracts::domain::a002_booking::aggregate::{BookingConfirmation, BookingForm};
use contracts::shared::api_error::ApiError;
use serde::{Deserialize, Serialize};

use crate::shared::api_utils::post_json;

/// Параметры `/book?tour=1&date=2025-06-15&participants=2`.
/// Все поля необязательны: страница открывается и без них.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookQuery {
    pub tour: Option<i64>,
    pub date: Option<NaiveDate>,
    pub participants: Option<i64>,
}

impl BookQuery {
    /// Некорректные параметры не мешают открыть форму
    pub fn from_query_string(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }

    /// Начальное состояние формы
    pub fn initial_form(&self) -> BookingForm {
        let mut form = BookingForm::with_tour(self.tour.map(TourId::new));
        form.date = self.date;
        if let Some(participants) = self.participants {
            form.participants = participants;
        }
        form
    }
}

/// Отправить бронирование
pub async fn submit(form: &BookingForm) -> Result<BookingConfirmation, ApiError> {
    post_json("/api/bookings", form).await
}
