use contracts::domain::a003_feedback::aggregate::Review;
use contracts::domain::a003_feedback::seed::sample_reviews;
use tokio::sync::RwLock;

/// Отзывы в памяти процесса
#[derive(Debug, Default)]
pub struct ReviewRepository {
    items: RwLock<Vec<Review>>,
}

impl ReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples() -> Self {
        Self {
            items: RwLock::new(sample_reviews()),
        }
    }

    /// Сначала новые (по дате, затем по идентификатору)
    pub async fn list_recent(&self) -> Vec<Review> {
        let mut reviews = self.items.read().await.clone();
        reviews.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        reviews
    }

    pub async fn list_all(&self) -> Vec<Review> {
        self.items.read().await.clone()
    }

    /// Сохранить отзыв, выдав ему следующий идентификатор
    pub async fn insert_with<F>(&self, build: F) -> Review
    where
        F: FnOnce(i64) -> Review,
    {
        let mut items = self.items.write().await;
        let next_id = items.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let review = build(next_id);
        items.push(review.clone());
        review
    }
}
