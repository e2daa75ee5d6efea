//! Тело ответа с ошибкой, общее для бэкенда и фронтенда.

use serde::{Deserialize, Serialize};

use super::validation::FailureReason;

/// API error response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (form field for validation errors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl From<&FailureReason> for ApiError {
    fn from(reason: &FailureReason) -> Self {
        let error = ApiError::new(reason.code(), reason.to_string());
        match reason.field() {
            Some(field) => error.with_details(field),
            None => error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_failure_reason_carries_code_and_field() {
        let error = ApiError::from(&FailureReason::MissingDate);
        assert_eq!(error.code, "MISSING_DATE");
        assert_eq!(error.message, "Please select an available date");
        assert_eq!(error.details.as_deref(), Some("date"));
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let json = serde_json::to_string(&ApiError::new("NOT_FOUND", "Tour not found")).unwrap();
        assert!(!json.contains("details"));
    }
}
