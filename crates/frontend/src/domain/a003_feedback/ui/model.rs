use contracts::domain::a003_feedback::aggregate::{FeedbackForm, Review};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{get_json, post_json};

/// Отзывы, новые первыми
pub async fn fetch_reviews() -> Result<Vec<Review>, String> {
    get_json("/api/feedback").await
}

pub async fn submit(form: &FeedbackForm) -> Result<Review, ApiError> {
    post_json("/api/feedback", form).await
}

/// Пустые необязательные поля не отправляются
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_drops_blank_values() {
        assert_eq!(optional("   ".into()), None);
        assert_eq!(optional(" Ann ".into()).as_deref(), Some("Ann"));
    }
}
