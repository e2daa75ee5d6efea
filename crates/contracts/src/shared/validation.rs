//! Ошибки валидации форм и общие правила для полей.
//!
//! Все ошибки восстановимы: форма остаётся в режиме редактирования и
//! показывает сообщение пользователю.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Минимальная длина имени (регистрация, профиль)
pub const MIN_NAME_LEN: usize = 2;

/// Минимальная длина пароля
pub const MIN_PASSWORD_LEN: usize = 6;

/// Причина отказа при проверке формы
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureReason {
    #[error("Please select a tour")]
    MissingTour,

    #[error("Please select an available date")]
    MissingDate,

    #[error("Number of participants must be between 1 and 10")]
    InvalidParticipantCount,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please select a rating")]
    MissingRating,

    #[error("You must agree to the terms and conditions")]
    TermsNotAccepted,

    #[error("Name must be at least 2 characters")]
    NameTooShort,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("{field} is required")]
    MissingField { field: String },
}

impl FailureReason {
    /// Машинный код ошибки (совпадает с тегом в JSON)
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::MissingTour => "MISSING_TOUR",
            FailureReason::MissingDate => "MISSING_DATE",
            FailureReason::InvalidParticipantCount => "INVALID_PARTICIPANT_COUNT",
            FailureReason::PasswordMismatch => "PASSWORD_MISMATCH",
            FailureReason::MissingRating => "MISSING_RATING",
            FailureReason::TermsNotAccepted => "TERMS_NOT_ACCEPTED",
            FailureReason::NameTooShort => "NAME_TOO_SHORT",
            FailureReason::InvalidEmail => "INVALID_EMAIL",
            FailureReason::PasswordTooShort => "PASSWORD_TOO_SHORT",
            FailureReason::MissingField { .. } => "MISSING_FIELD",
        }
    }

    /// Имя поля формы, к которому относится ошибка
    pub fn field(&self) -> Option<&str> {
        match self {
            FailureReason::MissingTour => Some("tourId"),
            FailureReason::MissingDate => Some("date"),
            FailureReason::InvalidParticipantCount => Some("participants"),
            FailureReason::PasswordMismatch => Some("confirmPassword"),
            FailureReason::MissingRating => Some("rating"),
            FailureReason::TermsNotAccepted => Some("agreeToTerms"),
            FailureReason::NameTooShort => Some("name"),
            FailureReason::InvalidEmail => Some("email"),
            FailureReason::PasswordTooShort => Some("password"),
            FailureReason::MissingField { field } => Some(field.as_str()),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        FailureReason::MissingField {
            field: field.into(),
        }
    }
}

/// Обязательное текстовое поле
pub fn require(field: &str, value: &str) -> Result<(), FailureReason> {
    if value.trim().is_empty() {
        return Err(FailureReason::missing(field));
    }
    Ok(())
}

/// Имя: минимум два символа без учёта пробелов по краям
pub fn validate_name(value: &str) -> Result<(), FailureReason> {
    if value.trim().chars().count() < MIN_NAME_LEN {
        return Err(FailureReason::NameTooShort);
    }
    Ok(())
}

/// Упрощённая проверка e-mail: `local@domain.tld`, без пробелов
pub fn validate_email(value: &str) -> Result<(), FailureReason> {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return Err(FailureReason::InvalidEmail);
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Err(FailureReason::InvalidEmail);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(FailureReason::InvalidEmail);
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(FailureReason::InvalidEmail);
    };
    if host.is_empty() || tld.is_empty() {
        return Err(FailureReason::InvalidEmail);
    }
    Ok(())
}

/// Необязательный e-mail: пустое значение допустимо
pub fn validate_optional_email(value: Option<&str>) -> Result<(), FailureReason> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => validate_email(v),
        _ => Ok(()),
    }
}

/// Новый пароль и его подтверждение
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), FailureReason> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FailureReason::PasswordTooShort);
    }
    if password != confirmation {
        return Err(FailureReason::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        assert!(validate_email("your.email@example.com").is_ok());
        assert!(validate_email("  a@b.co ").is_ok());
        assert_eq!(validate_email("john"), Err(FailureReason::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(FailureReason::InvalidEmail));
        assert_eq!(validate_email("john@example"), Err(FailureReason::InvalidEmail));
        assert_eq!(validate_email("john@.com"), Err(FailureReason::InvalidEmail));
        assert_eq!(validate_email("jo hn@example.com"), Err(FailureReason::InvalidEmail));
        assert_eq!(validate_email("a@b@c.com"), Err(FailureReason::InvalidEmail));
    }

    #[test]
    fn test_optional_email_accepts_blank() {
        assert!(validate_optional_email(None).is_ok());
        assert!(validate_optional_email(Some("   ")).is_ok());
        assert_eq!(
            validate_optional_email(Some("nope")),
            Err(FailureReason::InvalidEmail)
        );
    }

    #[test]
    fn test_name_and_required() {
        assert_eq!(validate_name(" J "), Err(FailureReason::NameTooShort));
        assert!(validate_name("Jo").is_ok());
        assert_eq!(
            require("phone", "  "),
            Err(FailureReason::MissingField {
                field: "phone".into()
            })
        );
    }

    #[test]
    fn test_password_rules_check_length_before_match() {
        assert_eq!(
            validate_new_password("abc", "abd"),
            Err(FailureReason::PasswordTooShort)
        );
        assert_eq!(
            validate_new_password("secret1", "secret2"),
            Err(FailureReason::PasswordMismatch)
        );
        assert!(validate_new_password("secret1", "secret1").is_ok());
    }

    #[test]
    fn test_failure_reason_json_uses_code_tag() {
        let json = serde_json::to_value(FailureReason::MissingDate).unwrap();
        assert_eq!(json["code"], "MISSING_DATE");
        let json = serde_json::to_value(FailureReason::missing("phone")).unwrap();
        assert_eq!(json["code"], "MISSING_FIELD");
        assert_eq!(json["field"], "phone");
        assert_eq!(FailureReason::missing("phone").code(), "MISSING_FIELD");
        assert_eq!(FailureReason::missing("phone").to_string(), "phone is required");
    }
}
