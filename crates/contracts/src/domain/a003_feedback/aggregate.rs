use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::validation::{require, validate_optional_email, FailureReason};

/// Максимальная оценка (звёзды)
pub const MAX_RATING: u8 = 5;

/// Имя автора, если он его не указал
pub const ANONYMOUS: &str = "Anonymous";

// ============================================================================
// Aggregate
// ============================================================================

/// Отзыв о туре
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub rating: u8,
    pub date: NaiveDate,
    pub tour: String,
    pub comment: String,
}

impl Review {
    /// Отзыв из проверенной формы
    pub fn from_form(id: i64, form: &FeedbackForm, date: NaiveDate) -> Self {
        let name = form.name.as_deref().map(str::trim).unwrap_or_default();
        Self {
            id,
            name: if name.is_empty() {
                ANONYMOUS.to_string()
            } else {
                name.to_string()
            },
            avatar: None,
            rating: form.rating,
            date,
            tour: form.tour_name.trim().to_string(),
            comment: form.comment.trim().to_string(),
        }
    }

    /// Первая буква имени для заглушки аватара
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Средняя оценка; `None` для пустого списка
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(f64::from(sum) / reviews.len() as f64)
}

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedbackForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "tourName")]
    pub tour_name: String,
    /// 0 означает "оценка не выбрана"
    pub rating: u8,
    pub comment: String,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<(), FailureReason> {
        if self.rating == 0 || self.rating > MAX_RATING {
            return Err(FailureReason::MissingRating);
        }
        require("tourName", &self.tour_name)?;
        require("comment", &self.comment)?;
        validate_optional_email(self.email.as_deref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FeedbackForm {
        FeedbackForm {
            name: None,
            email: None,
            tour_name: "Paris City Tour".into(),
            rating: 4,
            comment: "Lovely".into(),
        }
    }

    #[test]
    fn test_rating_zero_is_missing_rating() {
        let mut f = form();
        f.rating = 0;
        assert_eq!(f.validate(), Err(FailureReason::MissingRating));
        f.rating = 6;
        assert_eq!(f.validate(), Err(FailureReason::MissingRating));
    }

    #[test]
    fn test_required_fields() {
        let mut f = form();
        f.comment = "  ".into();
        assert_eq!(f.validate(), Err(FailureReason::missing("comment")));

        let mut f = form();
        f.tour_name.clear();
        assert_eq!(f.validate(), Err(FailureReason::missing("tourName")));
    }

    #[test]
    fn test_optional_email() {
        let mut f = form();
        f.email = Some(String::new());
        assert!(f.validate().is_ok());
        f.email = Some("not-an-email".into());
        assert_eq!(f.validate(), Err(FailureReason::InvalidEmail));
    }

    #[test]
    fn test_from_form_defaults_to_anonymous() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let review = Review::from_form(10, &form(), date);
        assert_eq!(review.name, ANONYMOUS);
        assert_eq!(review.initial(), 'A');
        assert_eq!(review.rating, 4);
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&[]), None);
        let date = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut a = Review::from_form(1, &form(), date);
        a.rating = 5;
        let mut b = a.clone();
        b.rating = 4;
        let c = a.clone();
        let avg = average_rating(&[a, b, c]).unwrap();
        assert!((avg - 14.0 / 3.0).abs() < 1e-9);
    }
}
