use async_trait::async_trait;
use contracts::domain::a001_tour::aggregate::{Tour, TourId};
use contracts::domain::a001_tour::catalog::TourCatalog;
use contracts::domain::a001_tour::seed::sample_tours;
use std::path::Path;

/// Источник туров.
///
/// Обработчики не знают, откуда берутся туры; сейчас это неизменяемый
/// каталог в памяти, загруженный при старте.
#[async_trait]
pub trait TourProvider: Send + Sync {
    async fn list_all(&self) -> anyhow::Result<Vec<Tour>>;

    async fn get_by_id(&self, id: TourId) -> anyhow::Result<Option<Tour>> {
        Ok(self.list_all().await?.into_iter().find(|t| t.id == id))
    }
}

/// Каталог, заданный при запуске: встроенный или из JSON-файла
#[derive(Debug, Clone)]
pub struct SeedTourProvider {
    tours: Vec<Tour>,
}

impl SeedTourProvider {
    pub fn builtin() -> Self {
        Self {
            tours: sample_tours(),
        }
    }

    /// Каталог из JSON-массива туров
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let tours: Vec<Tour> = serde_json::from_str(json)?;
        Self::from_tours(tours)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;
        Self::from_json(&json)
    }

    /// Проверяет каждый тур и уникальность идентификаторов
    pub fn from_tours(tours: Vec<Tour>) -> anyhow::Result<Self> {
        for (i, tour) in tours.iter().enumerate() {
            tour.validate()
                .map_err(|e| anyhow::anyhow!("Tour #{} ({}) is invalid: {}", i, tour.id, e))?;
            if tours[..i].iter().any(|t| t.id == tour.id) {
                anyhow::bail!("Duplicate tour id {}", tour.id);
            }
        }
        Ok(Self { tours })
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}

impl TourCatalog for SeedTourProvider {
    fn list_all(&self) -> &[Tour] {
        &self.tours
    }
}

#[async_trait]
impl TourProvider for SeedTourProvider {
    async fn list_all(&self) -> anyhow::Result<Vec<Tour>> {
        Ok(self.tours.clone())
    }

    async fn get_by_id(&self, id: TourId) -> anyhow::Result<Option<Tour>> {
        Ok(self.find_by_id(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtin_catalog() {
        let provider = SeedTourProvider::builtin();
        assert_eq!(provider.len(), 6);
        let tokyo = TourProvider::get_by_id(&provider, TourId(2)).await.unwrap().unwrap();
        assert_eq!(tokyo.title, "Tokyo Adventure");
        assert!(TourProvider::get_by_id(&provider, TourId(99)).await.unwrap().is_none());
    }

    #[test]
    fn test_from_json_minimal_tour() {
        let json = r#"[{
            "id": 7, "title": "Lisbon Walk", "description": "Old town",
            "location": "Portugal", "category": "City", "price": 99,
            "duration": "1 day", "rating": 4.2, "availableDates": ["2025-10-01"]
        }]"#;
        let provider = SeedTourProvider::from_json(json).unwrap();
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut tours = sample_tours();
        tours[1].id = TourId(1);
        assert!(SeedTourProvider::from_tours(tours).is_err());
    }

    #[test]
    fn test_invalid_tour_rejected() {
        let mut tours = sample_tours();
        tours[0].price = -1.0;
        assert!(SeedTourProvider::from_tours(tours).is_err());
    }
}
