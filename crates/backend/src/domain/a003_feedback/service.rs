use chrono::Local;
use contracts::domain::a003_feedback::aggregate::{FeedbackForm, Review};

use super::repository::ReviewRepository;

pub async fn submit(repo: &ReviewRepository, form: FeedbackForm) -> anyhow::Result<Review> {
    form.validate()?;
    let today = Local::now().date_naive();
    let review = repo
        .insert_with(|id| Review::from_form(id, &form, today))
        .await;
    tracing::info!("Review {} for \"{}\": {} stars", review.id, review.tour, review.rating);
    Ok(review)
}

pub async fn list_recent(repo: &ReviewRepository) -> Vec<Review> {
    repo.list_recent().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::validation::FailureReason;

    fn form(rating: u8) -> FeedbackForm {
        FeedbackForm {
            name: Some("Kim".into()),
            email: None,
            tour_name: "Tokyo Adventure".into(),
            rating,
            comment: "Fun".into(),
        }
    }

    #[tokio::test]
    async fn test_new_review_comes_first() {
        let repo = ReviewRepository::with_samples();
        let review = submit(&repo, form(5)).await.unwrap();
        assert_eq!(review.id, 4);
        let recent = list_recent(&repo).await;
        assert_eq!(recent[0].id, 4);
        assert_eq!(recent.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_rating() {
        let repo = ReviewRepository::new();
        let err = submit(&repo, form(0)).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<FailureReason>(),
            Some(&FailureReason::MissingRating)
        );
        assert!(repo.list_all().await.is_empty());
    }
}
