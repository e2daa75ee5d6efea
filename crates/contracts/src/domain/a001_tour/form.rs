use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::{Tour, TourId};
use crate::enums::tour_status::TourStatus;

/// Категории, доступные в форме тура
pub const TOUR_CATEGORIES: [&str; 6] = ["City", "Nature", "Beach", "Adventure", "Cultural", "Food"];

/// Форма добавления и редактирования тура в кабинете агентства.
///
/// Поля хранятся строками, как их вводит пользователь; разбор и проверка
/// происходят в [`TourForm::into_tour`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourForm {
    /// `Some` в режиме редактирования
    pub id: Option<TourId>,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub price: String,
    pub duration: String,
    pub image: String,
    #[serde(rename = "availableDates")]
    pub available_dates: Vec<String>,
    pub status: TourStatus,
}

impl Default for TourForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            location: String::new(),
            category: TOUR_CATEGORIES[0].into(),
            price: String::new(),
            duration: String::new(),
            image: String::new(),
            available_dates: vec![String::new()],
            status: TourStatus::Draft,
        }
    }
}

impl TourForm {
    /// Форма, заполненная данными существующего тура
    pub fn from_tour(tour: &Tour) -> Self {
        let mut available_dates: Vec<String> = tour
            .available_dates
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();
        if available_dates.is_empty() {
            available_dates.push(String::new());
        }
        Self {
            id: Some(tour.id),
            title: tour.title.clone(),
            description: tour.description.clone(),
            location: tour.location.clone(),
            category: tour.category.clone(),
            price: tour.price.to_string(),
            duration: tour.duration.clone(),
            image: tour.image.clone().unwrap_or_default(),
            available_dates,
            status: tour.status,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn add_date(&mut self) {
        self.available_dates.push(String::new());
    }

    /// Последняя строка даты не удаляется, только очищается
    pub fn remove_date(&mut self, index: usize) {
        if index >= self.available_dates.len() {
            return;
        }
        if self.available_dates.len() == 1 {
            self.available_dates[0].clear();
        } else {
            self.available_dates.remove(index);
        }
    }

    pub fn set_date(&mut self, index: usize, value: String) {
        if let Some(slot) = self.available_dates.get_mut(index) {
            *slot = value;
        }
    }

    /// Собрать тур из формы.
    ///
    /// `base` — редактируемый тур: поля, которых нет в форме (рейтинг,
    /// галерея, программа), берутся из него. Новый тур получает `new_id`
    /// и нулевой рейтинг.
    pub fn into_tour(self, new_id: TourId, base: Option<&Tour>) -> Result<Tour, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".into());
        }
        let location = self.location.trim();
        if location.is_empty() {
            return Err("Location is required".into());
        }
        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| format!("Price must be a number: {}", self.price.trim()))?;

        let mut dates = Vec::with_capacity(self.available_dates.len());
        for raw in self.available_dates.iter().map(|d| d.trim()) {
            if raw.is_empty() {
                continue;
            }
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| format!("Invalid date: {}", raw))?;
            dates.push(date);
        }
        dates.sort();
        dates.dedup();
        if dates.is_empty() {
            return Err("At least one available date is required".into());
        }

        let mut tour = match base {
            Some(base) => base.clone(),
            None => Tour::new(new_id.value(), "", "", "", "", 0.0, "", 0.0, Vec::new()),
        };
        tour.id = self.id.or(base.map(|b| b.id)).unwrap_or(new_id);
        tour.title = title.to_string();
        tour.description = self.description.trim().to_string();
        tour.location = location.to_string();
        tour.category = self.category;
        tour.price = price;
        tour.duration = self.duration.trim().to_string();
        tour.image = Some(self.image.trim().to_string()).filter(|s| !s.is_empty());
        tour.available_dates = dates;
        tour.status = self.status;

        tour.validate()?;
        Ok(tour)
    }
}

/// Следующий свободный идентификатор для тура, созданного в кабинете
pub fn next_tour_id(tours: &[Tour]) -> TourId {
    TourId(tours.iter().map(|t| t.id.value()).max().unwrap_or(0) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::seed::sample_tours;

    fn filled() -> TourForm {
        TourForm {
            title: "Lisbon Trams".into(),
            description: "Ride the hills".into(),
            location: "Lisbon, Portugal".into(),
            category: "City".into(),
            price: "149.5".into(),
            duration: "1 day".into(),
            available_dates: vec!["2025-09-10".into(), "".into(), "2025-09-01".into()],
            ..TourForm::default()
        }
    }

    #[test]
    fn test_new_tour_from_form() {
        let tour = filled().into_tour(TourId(9), None).unwrap();
        assert_eq!(tour.id, TourId(9));
        assert_eq!(tour.price, 149.5);
        assert_eq!(tour.rating, 0.0);
        assert_eq!(tour.status, TourStatus::Draft);
        assert_eq!(tour.image, None);
        assert_eq!(
            tour.available_dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            ]
        );
    }

    #[test]
    fn test_edit_keeps_fields_outside_form() {
        let tours = sample_tours();
        let original = &tours[0];
        let mut form = TourForm::from_tour(original);
        assert!(form.is_edit_mode());
        form.title = "Renamed".into();
        form.price = "10".into();

        let tour = form.into_tour(next_tour_id(&tours), Some(original)).unwrap();
        assert_eq!(tour.id, original.id);
        assert_eq!(tour.title, "Renamed");
        assert_eq!(tour.price, 10.0);
        assert_eq!(tour.rating, original.rating);
        assert_eq!(tour.highlights, original.highlights);
        assert_eq!(tour.available_dates, original.available_dates);
    }

    #[test]
    fn test_rejected_forms() {
        let mut form = filled();
        form.title = "  ".into();
        assert_eq!(form.into_tour(TourId(9), None).unwrap_err(), "Title is required");

        let mut form = filled();
        form.price = "cheap".into();
        assert!(form.into_tour(TourId(9), None).unwrap_err().starts_with("Price"));

        let mut form = filled();
        form.price = "-5".into();
        assert!(form.into_tour(TourId(9), None).unwrap_err().starts_with("Price"));

        let mut form = filled();
        form.available_dates = vec!["".into()];
        assert_eq!(
            form.into_tour(TourId(9), None).unwrap_err(),
            "At least one available date is required"
        );

        let mut form = filled();
        form.available_dates = vec!["10/09/2025".into()];
        assert_eq!(
            form.into_tour(TourId(9), None).unwrap_err(),
            "Invalid date: 10/09/2025"
        );
    }

    #[test]
    fn test_date_rows() {
        let mut form = TourForm::default();
        form.set_date(0, "2025-01-01".into());
        form.add_date();
        form.set_date(1, "2025-02-01".into());
        form.remove_date(0);
        assert_eq!(form.available_dates, vec!["2025-02-01".to_string()]);
        form.remove_date(0);
        assert_eq!(form.available_dates, vec![String::new()]);
        form.remove_date(5);
        assert_eq!(form.available_dates.len(), 1);
    }

    #[test]
    fn test_next_id_after_max() {
        let tours = sample_tours();
        let max = tours.iter().map(|t| t.id.value()).max().unwrap();
        assert_eq!(next_tour_id(&tours), TourId(max + 1));
        assert_eq!(next_tour_id(&[]), TourId(1));
    }
}
