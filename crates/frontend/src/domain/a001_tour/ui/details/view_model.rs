use chrono::NaiveDate;
use contracts::domain::a001_tour::aggregate::Tour;
use contracts::domain::a002_booking::pricing::{compute_total, validate_booking};
use contracts::shared::validation::FailureReason;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::super::model;
use crate::domain::a002_booking::ui::form::model::BookQuery;

/// ViewModel страницы тура
#[derive(Clone, Copy)]
pub struct TourDetailsVm {
    pub tour: RwSignal<Option<Tour>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub selected_date: RwSignal<Option<NaiveDate>>,
    pub participants: RwSignal<u32>,
    pub image_index: RwSignal<usize>,
}

impl TourDetailsVm {
    pub fn new() -> Self {
        Self {
            tour: RwSignal::new(None),
            is_loading: RwSignal::new(true),
            error: RwSignal::new(None),
            selected_date: RwSignal::new(None),
            participants: RwSignal::new(1),
            image_index: RwSignal::new(0),
        }
    }

    /// Загрузить тур; нечисловой ID сразу даёт "Tour not found"
    pub fn load(&self, raw_id: Option<String>) {
        let Some(id) = raw_id.and_then(|s| s.parse::<i64>().ok()) else {
            self.tour.set(None);
            self.error.set(Some("Tour not found".to_string()));
            return;
        };

        let vm = *self;
        vm.is_loading.set(true);
        vm.error.set(None);
        vm.selected_date.set(None);
        vm.participants.set(1);
        vm.image_index.set(0);

        spawn_local(async move {
            match model::fetch_by_id(id).await {
                Ok(tour) => vm.tour.set(Some(tour)),
                Err(e) => {
                    log::warn!("Tour {} not loaded: {}", id, e);
                    vm.tour.set(None);
                    vm.error.set(Some("Tour not found".to_string()));
                }
            }
            vm.is_loading.set(false);
        });
    }

    /// Итоговая цена пересчитывается при каждом изменении числа участников
    pub fn total(&self) -> f64 {
        let price = self.tour.with(|t| t.as_ref().map(|t| t.price).unwrap_or(0.0));
        compute_total(price, self.participants.get())
    }

    pub fn next_image(&self) {
        let len = self.gallery_len();
        self.image_index.update(|i| *i = next_index(*i, len));
    }

    pub fn prev_image(&self) {
        let len = self.gallery_len();
        self.image_index.update(|i| *i = prev_index(*i, len));
    }

    fn gallery_len(&self) -> usize {
        self.tour.with(|t| t.as_ref().map(|t| t.gallery().len()).unwrap_or(0))
    }

    /// Ссылка на форму бронирования; без выбранной даты возвращает ошибку
    pub fn booking_link(&self) -> Result<String, FailureReason> {
        let tour = self.tour.get_untracked().ok_or(FailureReason::MissingTour)?;
        booking_link(&tour, self.selected_date.get_untracked(), self.participants.get_untracked())
    }
}

impl Default for TourDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

/// `/book?tour=..&date=..&participants=..` после той же проверки, что и при отправке формы
pub fn booking_link(
    tour: &Tour,
    date: Option<NaiveDate>,
    participants: u32,
) -> Result<String, FailureReason> {
    let request = validate_booking(std::slice::from_ref(tour), Some(tour.id), date, participants as i64)?;
    let query = BookQuery {
        tour: Some(request.tour_id.value()),
        date: Some(request.selected_date),
        participants: Some(request.participant_count as i64),
    };
    Ok(format!("/book?{}", query.to_query_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_tour::seed::sample_tours;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_gallery_index_wraps() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn test_booking_link_requires_date() {
        let paris = &sample_tours()[0];
        assert_eq!(booking_link(paris, None, 2), Err(FailureReason::MissingDate));
        assert_eq!(
            booking_link(paris, Some(d(2025, 6, 20)), 2),
            Err(FailureReason::MissingDate)
        );
    }

    #[test]
    fn test_booking_link_carries_selection() {
        let paris = &sample_tours()[0];
        let link = booking_link(paris, Some(d(2025, 7, 10)), 3).unwrap();
        assert!(link.starts_with("/book?"));
        let query = BookQuery::from_query_string(link.trim_start_matches("/book"));
        assert_eq!(query.tour, Some(1));
        assert_eq!(query.date, Some(d(2025, 7, 10)));
        assert_eq!(query.participants, Some(3));
    }
}
