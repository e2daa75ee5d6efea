use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateId;
use crate::enums::tour_status::TourStatus;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор тура (положительное целое, уникально в каталоге)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TourId(pub i64);

impl TourId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for TourId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let value = i64::from_string(s)?;
        if value <= 0 {
            return Err(format!("Tour id must be positive: {}", value));
        }
        Ok(TourId(value))
    }
}

impl std::fmt::Display for TourId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Тур: туристический пакет с фиксированной ценой, длительностью и датами.
///
/// Каталог туров статичен в рамках сессии и не изменяется во время работы.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub id: TourId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    /// Цена за одного участника, без валюты (подразумевается доллар)
    pub price: f64,
    /// Свободный текст, например "3 days"; не разбирается
    pub duration: String,
    /// Рейтинг 0..=5
    pub rating: f64,
    #[serde(rename = "availableDates")]
    pub available_dates: Vec<NaiveDate>,

    // Поля страницы тура
    #[serde(rename = "longDescription", default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(rename = "groupSize", default)]
    pub group_size: Option<u32>,
    #[serde(rename = "meetingPoint", default)]
    pub meeting_point: Option<String>,
    #[serde(default)]
    pub status: TourStatus,
}

impl Tour {
    /// Создать тур с обязательными полями каталога
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: &str,
        description: &str,
        location: &str,
        category: &str,
        price: f64,
        duration: &str,
        rating: f64,
        available_dates: Vec<NaiveDate>,
    ) -> Self {
        Self {
            id: TourId(id),
            title: title.into(),
            description: description.into(),
            location: location.into(),
            category: category.into(),
            price,
            duration: duration.into(),
            rating,
            available_dates,
            long_description: None,
            image: None,
            images: Vec::new(),
            highlights: Vec::new(),
            included: Vec::new(),
            group_size: None,
            meeting_point: None,
            status: TourStatus::Active,
        }
    }

    /// Дата входит в расписание тура
    pub fn offers_date(&self, date: NaiveDate) -> bool {
        self.available_dates.contains(&date)
    }

    /// Изображения для галереи: список `images`, иначе обложка
    pub fn gallery(&self) -> Vec<String> {
        if !self.images.is_empty() {
            return self.images.clone();
        }
        self.image.iter().cloned().collect()
    }

    /// Длинное описание, если задано, иначе краткое
    pub fn full_description(&self) -> &str {
        self.long_description
            .as_deref()
            .unwrap_or(self.description.as_str())
    }

    /// Валидация инвариантов каталога
    pub fn validate(&self) -> Result<(), String> {
        if self.id.0 <= 0 {
            return Err(format!("Tour id must be positive: {}", self.id));
        }
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("Price cannot be negative: {}", self.price));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(format!("Rating must be within 0..5: {}", self.rating));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tour {
        Tour::new(
            1,
            "Paris City Tour",
            "Explore Paris",
            "France",
            "City",
            199.0,
            "3 days",
            4.8,
            vec![NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()],
        )
    }

    #[test]
    fn test_tour_id_parsing() {
        assert_eq!(TourId::from_string("3"), Ok(TourId(3)));
        assert!(TourId::from_string("0").is_err());
        assert!(TourId::from_string("-1").is_err());
        assert!(TourId::from_string("abc").is_err());
    }

    #[test]
    fn test_validate_invariants() {
        let mut tour = sample();
        assert!(tour.validate().is_ok());

        tour.price = -1.0;
        assert!(tour.validate().is_err());

        tour.price = 10.0;
        tour.rating = 5.1;
        assert!(tour.validate().is_err());

        tour.rating = 5.0;
        tour.id = TourId(0);
        assert!(tour.validate().is_err());
    }

    #[test]
    fn test_dates_serialize_as_iso_strings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["availableDates"][0], "2025-06-15");
        assert_eq!(json["status"], "Active");
    }

    #[test]
    fn test_gallery_falls_back_to_cover_image() {
        let mut tour = sample();
        assert!(tour.gallery().is_empty());
        tour.image = Some("cover.jpg".into());
        assert_eq!(tour.gallery(), vec!["cover.jpg".to_string()]);
        tour.images = vec!["a.jpg".into(), "b.jpg".into()];
        assert_eq!(tour.gallery().len(), 2);
    }
}
