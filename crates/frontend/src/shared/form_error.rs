//! Ошибка формы с привязкой к полю.
//!
//! Локальная проверка (`FailureReason`) и ответ бэкенда (`ApiError`)
//! приводятся к одному виду, чтобы форма показывала их одинаково.

use contracts::shared::api_error::ApiError;
use contracts::shared::validation::FailureReason;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct FormError {
    pub field: Option<String>,
    pub message: String,
}

impl FormError {
    /// Сообщение, если ошибка относится к полю `field`
    pub fn message_for(&self, field: &str) -> Option<String> {
        (self.field.as_deref() == Some(field)).then(|| self.message.clone())
    }

    /// Сообщение общего уровня: ошибка без поля (сеть, конфликт)
    pub fn general(&self) -> Option<String> {
        self.field.is_none().then(|| self.message.clone())
    }
}

impl From<&FailureReason> for FormError {
    fn from(reason: &FailureReason) -> Self {
        Self {
            field: reason.field().map(str::to_string),
            message: reason.to_string(),
        }
    }
}

impl From<FailureReason> for FormError {
    fn from(reason: FailureReason) -> Self {
        Self::from(&reason)
    }
}

impl From<ApiError> for FormError {
    fn from(error: ApiError) -> Self {
        Self {
            field: error.details,
            message: error.message,
        }
    }
}

/// Реактивное сообщение для одного поля формы
pub fn field_error(error: RwSignal<Option<FormError>>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || error.get().and_then(|e| e.message_for(field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_is_bound_to_its_field() {
        let error = FormError::from(FailureReason::InvalidEmail);
        assert_eq!(
            error.message_for("email").as_deref(),
            Some("Please enter a valid email address")
        );
        assert_eq!(error.message_for("name"), None);
        assert_eq!(error.general(), None);
    }

    #[test]
    fn test_missing_field_uses_field_name() {
        let error = FormError::from(FailureReason::missing("phone"));
        assert_eq!(error.message_for("phone").as_deref(), Some("phone is required"));
    }

    #[test]
    fn test_api_error_without_details_is_general() {
        let error = FormError::from(ApiError::new("CONFLICT", "Email is already registered"));
        assert_eq!(error.general().as_deref(), Some("Email is already registered"));
        assert_eq!(error.message_for("email"), None);
    }

    #[test]
    fn test_api_validation_error_keeps_field() {
        let error = FormError::from(ApiError::from(&FailureReason::MissingDate));
        assert_eq!(
            error.message_for("date").as_deref(),
            Some("Please select an available date")
        );
    }
}
