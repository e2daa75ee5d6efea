use std::collections::BTreeSet;

use contracts::domain::a001_tour::aggregate::Tour;
use contracts::domain::a001_tour::filter::{filter_tours, toggle_category, TourQuery};
use leptos::prelude::*;

/// Фильтры каталога. Отражаются в адресной строке (`?q=...&categories=...`),
/// чтобы ссылку на отфильтрованный список можно было открыть заново.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TourListState {
    pub q: String,
    pub categories: BTreeSet<String>,
}

impl TourListState {
    pub fn from_query(query: &TourQuery) -> Self {
        Self {
            q: query.text().to_string(),
            categories: query.category_set(),
        }
    }

    /// Разбор строки запроса без ведущего `?`; мусор даёт пустые фильтры
    pub fn from_query_string(search: &str) -> Self {
        let query: TourQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        Self::from_query(&query)
    }

    pub fn to_query(&self) -> TourQuery {
        let categories = self
            .categories
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(",");
        TourQuery {
            q: (!self.q.is_empty()).then(|| self.q.clone()),
            categories: (!categories.is_empty()).then_some(categories),
        }
    }

    pub fn query_string(&self) -> String {
        serde_qs::to_string(&self.to_query()).unwrap_or_default()
    }

    pub fn apply(&self, tours: &[Tour]) -> Vec<Tour> {
        filter_tours(tours, &self.q, &self.categories)
    }

    pub fn toggle(&mut self, category: &str) {
        toggle_category(&mut self.categories, category);
    }

    pub fn is_filtered(&self) -> bool {
        !self.q.is_empty() || !self.categories.is_empty()
    }
}

pub fn create_state(initial: TourListState) -> RwSignal<TourListState> {
    RwSignal::new(initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_tour::seed::sample_tours;

    #[test]
    fn test_parse_query_string() {
        let state = TourListState::from_query_string("?q=is&categories=Beach,Adventure");
        assert_eq!(state.q, "is");
        assert!(state.categories.contains("Beach"));
        assert!(state.categories.contains("Adventure"));
        assert!(state.is_filtered());
    }

    #[test]
    fn test_garbage_query_string_means_no_filter() {
        let state = TourListState::from_query_string("");
        assert_eq!(state, TourListState::default());
        assert!(!state.is_filtered());
        assert_eq!(state.apply(&sample_tours()).len(), 6);
    }

    #[test]
    fn test_query_string_is_read_back() {
        let mut state = TourListState {
            q: "paris".into(),
            ..Default::default()
        };
        state.toggle("City");
        state.toggle("Beach");
        let restored = TourListState::from_query_string(&state.query_string());
        assert_eq!(restored, state);
    }

    #[test]
    fn test_empty_state_serializes_to_nothing() {
        assert_eq!(TourListState::default().to_query(), TourQuery::default());
    }

    #[test]
    fn test_apply_uses_catalog_filter() {
        let mut state = TourListState::default();
        state.toggle("Beach");
        let titles: Vec<_> = state
            .apply(&sample_tours())
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Bali Beach Retreat", "Greek Islands Tour"]);

        state.toggle("Beach");
        assert!(!state.is_filtered());
    }
}
