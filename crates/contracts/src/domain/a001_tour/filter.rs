//! Фильтр каталога туров: поиск по тексту и по категориям.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::aggregate::Tour;

/// Совпадение по тексту: подстрока без учёта регистра в названии,
/// описании или локации. Пустой запрос подходит всем.
pub fn matches_query(tour: &Tour, query: &str) -> bool {
    matches_lowercase_query(tour, &query.to_lowercase())
}

fn matches_lowercase_query(tour: &Tour, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [&tour.title, &tour.description, &tour.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Совпадение по категории: пустой набор означает "без фильтра"
pub fn matches_categories(tour: &Tour, categories: &BTreeSet<String>) -> bool {
    categories.is_empty() || categories.contains(&tour.category)
}

/// Туры, подходящие и под текст, и под категории.
///
/// Порядок каталога сохраняется.
pub fn filter_tours(tours: &[Tour], query: &str, categories: &BTreeSet<String>) -> Vec<Tour> {
    let needle = query.to_lowercase();
    tours
        .iter()
        .filter(|tour| matches_lowercase_query(tour, &needle) && matches_categories(tour, categories))
        .cloned()
        .collect()
}

/// Уникальные категории в порядке первого появления
pub fn categories_of(tours: &[Tour]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tours
        .iter()
        .filter(|tour| seen.insert(tour.category.as_str()))
        .map(|tour| tour.category.clone())
        .collect()
}

/// Переключение чекбокса категории
pub fn toggle_category(categories: &mut BTreeSet<String>, category: &str) {
    if !categories.remove(category) {
        categories.insert(category.to_string());
    }
}

/// Query-параметры `GET /api/tours?q=...&categories=City,Beach`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TourQuery {
    pub q: Option<String>,
    /// Категории через запятую
    pub categories: Option<String>,
}

impl TourQuery {
    pub fn text(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn category_set(&self) -> BTreeSet<String> {
        self.categories
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Применить запрос к списку туров
    pub fn apply(&self, tours: &[Tour]) -> Vec<Tour> {
        filter_tours(tours, self.text(), &self.category_set())
    }
}
