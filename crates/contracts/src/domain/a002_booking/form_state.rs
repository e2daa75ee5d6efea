//! Состояния формы бронирования.
//!
//! ```text
//! Editing --submit(ok)--> Submitting --ok--> Confirmed --reset--> Editing
//!    ^                        |
//!    +--------edit------- Failed <--error--+
//! ```

use serde::{Deserialize, Serialize};

use super::aggregate::BookingConfirmation;
use crate::shared::validation::FailureReason;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum BookingPhase {
    #[default]
    Editing,
    Submitting,
    Confirmed(BookingConfirmation),
    Failed(String),
}

impl BookingPhase {
    /// Попытка отправки.
    ///
    /// Результат проверки формы решает, уходит ли запрос. При ошибке форма
    /// остаётся в `Editing`, а ошибка возвращается вызывающему. Повторная
    /// отправка во время `Submitting` игнорируется.
    pub fn submit<T>(&mut self, checked: Result<T, FailureReason>) -> Result<Option<T>, FailureReason> {
        match self {
            BookingPhase::Editing | BookingPhase::Failed(_) => {
                let value = checked?;
                *self = BookingPhase::Submitting;
                Ok(Some(value))
            }
            BookingPhase::Submitting | BookingPhase::Confirmed(_) => Ok(None),
        }
    }

    /// Ответ сервера на отправку
    pub fn resolve(&mut self, response: Result<BookingConfirmation, String>) {
        if !self.is_submitting() {
            return;
        }
        *self = match response {
            Ok(confirmation) => BookingPhase::Confirmed(confirmation),
            Err(message) => BookingPhase::Failed(message),
        };
    }

    /// Пользователь снова правит форму после ошибки
    pub fn edit(&mut self) {
        if matches!(self, BookingPhase::Failed(_)) {
            *self = BookingPhase::Editing;
        }
    }

    /// "Book Another Tour"
    pub fn reset(&mut self) {
        if matches!(self, BookingPhase::Confirmed(_)) {
            *self = BookingPhase::Editing;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, BookingPhase::Submitting)
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        match self {
            BookingPhase::Confirmed(c) => Some(c),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            BookingPhase::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::aggregate::TourId;
    use crate::domain::a002_booking::aggregate::BookingId;
    use chrono::NaiveDate;

    fn confirmation() -> BookingConfirmation {
        BookingConfirmation {
            id: BookingId::new_v4(),
            tour_id: TourId(1),
            tour_title: "Paris City Tour".into(),
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            participants: 2,
            total_price: 398.0,
            email: "john@example.com".into(),
        }
    }

    #[test]
    fn test_invalid_submit_stays_editing() {
        let mut phase = BookingPhase::Editing;
        let result = phase.submit::<()>(Err(FailureReason::MissingDate));
        assert_eq!(result, Err(FailureReason::MissingDate));
        assert_eq!(phase, BookingPhase::Editing);
    }

    #[test]
    fn test_happy_path() {
        let mut phase = BookingPhase::default();
        assert_eq!(phase.submit(Ok(5)), Ok(Some(5)));
        assert!(phase.is_submitting());

        let c = confirmation();
        phase.resolve(Ok(c.clone()));
        assert_eq!(phase.confirmation(), Some(&c));

        phase.reset();
        assert_eq!(phase, BookingPhase::Editing);
    }

    #[test]
    fn test_submit_is_ignored_while_submitting() {
        let mut phase = BookingPhase::Submitting;
        assert_eq!(phase.submit(Ok(1)), Ok(None));
        assert!(phase.is_submitting());
    }

    #[test]
    fn test_failure_branch() {
        let mut phase = BookingPhase::Editing;
        phase.submit(Ok(())).unwrap();
        phase.resolve(Err("Server unavailable".into()));
        assert_eq!(phase.error(), Some("Server unavailable"));

        phase.edit();
        assert_eq!(phase, BookingPhase::Editing);
    }

    #[test]
    fn test_resubmit_from_failed() {
        let mut phase = BookingPhase::Failed("timeout".into());
        assert_eq!(phase.submit(Ok(())), Ok(Some(())));
        assert!(phase.is_submitting());
    }

    #[test]
    fn test_resolve_outside_submitting_is_ignored() {
        let mut phase = BookingPhase::Editing;
        phase.resolve(Ok(confirmation()));
        assert_eq!(phase, BookingPhase::Editing);
    }
}
