use contracts::domain::a002_booking::aggregate::{BookingId, BookingRecord};
use contracts::domain::a002_booking::seed::sample_bookings;
use tokio::sync::RwLock;

/// Бронирования в памяти процесса. При перезапуске остаются только образцы.
#[derive(Debug, Default)]
pub struct BookingRepository {
    items: RwLock<Vec<BookingRecord>>,
}

impl BookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples() -> Self {
        Self {
            items: RwLock::new(sample_bookings()),
        }
    }

    pub async fn list_all(&self) -> Vec<BookingRecord> {
        self.items.read().await.clone()
    }

    pub async fn get_by_id(&self, id: BookingId) -> Option<BookingRecord> {
        self.items.read().await.iter().find(|b| b.id == id).cloned()
    }

    pub async fn insert(&self, record: BookingRecord) -> BookingId {
        let id = record.id;
        self.items.write().await.push(record);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = BookingRepository::new();
        let mut record = sample_bookings().remove(0);
        record.id = BookingId::new_v4();
        let id = repo.insert(record.clone()).await;
        assert_eq!(repo.get_by_id(id).await, Some(record));
        assert_eq!(repo.list_all().await.len(), 1);
    }
}
