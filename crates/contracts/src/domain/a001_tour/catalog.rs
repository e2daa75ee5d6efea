use super::aggregate::{Tour, TourId};

/// Источник туров для фильтра и валидации бронирования.
///
/// Логика не знает, откуда пришли данные: это может быть встроенный
/// каталог, ответ API или загруженный файл.
pub trait TourCatalog {
    /// Все туры в порядке каталога
    fn list_all(&self) -> &[Tour];

    /// Тур по идентификатору
    fn find_by_id(&self, id: TourId) -> Option<&Tour> {
        self.list_all().iter().find(|t| t.id == id)
    }
}

impl TourCatalog for [Tour] {
    fn list_all(&self) -> &[Tour] {
        self
    }
}

impl TourCatalog for Vec<Tour> {
    fn list_all(&self) -> &[Tour] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tour::seed::sample_tours;

    #[test]
    fn test_find_by_id() {
        let tours = sample_tours();
        assert_eq!(
            tours.find_by_id(TourId(2)).map(|t| t.title.as_str()),
            Some("Tokyo Adventure")
        );
        assert!(tours.find_by_id(TourId(99)).is_none());
        assert!(tours[..0].find_by_id(TourId(1)).is_none());
    }
}
