use contracts::domain::a001_tour::aggregate::{Tour, TourId};
use contracts::domain::a001_tour::filter::{categories_of, TourQuery};

use super::provider::TourProvider;

/// Список туров с фильтром по тексту и категориям
pub async fn list(provider: &dyn TourProvider, query: &TourQuery) -> anyhow::Result<Vec<Tour>> {
    let tours = provider.list_all().await?;
    let filtered = query.apply(&tours);
    tracing::debug!(
        "Tour filter q={:?} categories={:?}: {} of {}",
        query.q,
        query.categories,
        filtered.len(),
        tours.len()
    );
    Ok(filtered)
}

/// Категории каталога в порядке первого появления
pub async fn categories(provider: &dyn TourProvider) -> anyhow::Result<Vec<String>> {
    Ok(categories_of(&provider.list_all().await?))
}

pub async fn get_by_id(provider: &dyn TourProvider, id: TourId) -> anyhow::Result<Option<Tour>> {
    provider.get_by_id(id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::provider::SeedTourProvider;

    #[tokio::test]
    async fn test_list_with_query() {
        let provider = SeedTourProvider::builtin();
        let query = TourQuery {
            q: Some("an".into()),
            categories: Some("Beach".into()),
        };
        let tours = list(&provider, &query).await.unwrap();
        let titles: Vec<_> = tours.iter().map(|t| t.title.as_str()).collect();
        // "and" в описании Бали, "Islands" в названии греческого тура
        assert_eq!(titles, vec!["Bali Beach Retreat", "Greek Islands Tour"]);
    }

    #[tokio::test]
    async fn test_categories() {
        let provider = SeedTourProvider::builtin();
        assert_eq!(
            categories(&provider).await.unwrap(),
            vec!["City", "Adventure", "Beach"]
        );
    }
}
