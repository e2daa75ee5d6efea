use contracts::domain::a001_tour::aggregate::{Tour, TourId};
use contracts::domain::a001_tour::catalog::TourCatalog;
use contracts::domain::a002_booking::aggregate::BookingForm;
use contracts::domain::a002_booking::form_state::BookingPhase;
use contracts::domain::a002_booking::pricing::{compute_total, validate_participant_count};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::{self, BookQuery};
use crate::domain::a001_tour::ui::model as tour_model;
use crate::layout::toast_service::ToastService;
use crate::shared::date_utils::{format_long_date, parse_iso_date};
use crate::shared::form_error::FormError;

/// ViewModel формы бронирования
#[derive(Clone, Copy)]
pub struct BookingFormVm {
    pub form: RwSignal<BookingForm>,
    pub phase: RwSignal<BookingPhase>,
    pub error: RwSignal<Option<FormError>>,
    pub tours: RwSignal<Vec<Tour>>,
    pub tours_loading: RwSignal<bool>,
    toast: ToastService,
}

impl BookingFormVm {
    pub fn new(query: BookQuery, toast: ToastService) -> Self {
        let vm = Self {
            form: RwSignal::new(query.initial_form()),
            phase: RwSignal::new(BookingPhase::default()),
            error: RwSignal::new(None),
            tours: RwSignal::new(Vec::new()),
            tours_loading: RwSignal::new(true),
            toast,
        };
        vm.load_tours();
        vm
    }

    fn load_tours(&self) {
        let vm = *self;
        spawn_local(async move {
            match tour_model::fetch_all().await {
                Ok(list) => vm.tours.set(list),
                Err(e) => {
                    log::error!("Failed to load tours for booking: {}", e);
                    vm.error.set(Some(FormError {
                        field: None,
                        message: "Tours could not be loaded. Please try again later.".into(),
                    }));
                }
            }
            vm.tours_loading.set(false);
        });
    }

    pub fn selected_tour(&self) -> Option<Tour> {
        let tour_id = self.form.with(|f| f.tour_id)?;
        self.tours.with(|t| t.find_by_id(tour_id).cloned())
    }

    pub fn tour_options(&self) -> Vec<(String, String)> {
        self.tours.with(|tours| {
            tours
                .iter()
                .map(|t| (t.id.value().to_string(), format!("{} - ${}", t.title, t.price)))
                .collect()
        })
    }

    /// Даты выбранного тура; пусто, пока тур не выбран
    pub fn date_options(&self) -> Vec<(String, String)> {
        self.selected_tour()
            .map(|tour| {
                tour.available_dates
                    .iter()
                    .map(|d| (d.to_string(), format_long_date(*d)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Стоимость при корректном выборе, иначе None
    pub fn total(&self) -> Option<f64> {
        let tour = self.selected_tour()?;
        let participants = validate_participant_count(self.form.with(|f| f.participants)).ok()?;
        Some(compute_total(tour.price, participants))
    }

    /// Любая правка поля: снимаем ошибку и выходим из Failed
    pub fn edit(&self, apply: impl FnOnce(&mut BookingForm)) {
        self.form.update(apply);
        self.error.set(None);
        self.phase.update(|p| p.edit());
    }

    pub fn set_tour(&self, raw: String) {
        let tour_id = raw.parse::<i64>().ok().map(TourId::new);
        self.edit(|f| f.select_tour(tour_id));
    }

    pub fn set_date(&self, raw: String) {
        let date = parse_iso_date(&raw);
        self.edit(|f| f.date = date);
    }

    pub fn set_participants(&self, raw: String) {
        // Нечисловое значение превращается в 0 и не пройдёт проверку
        let count = raw.parse::<i64>().unwrap_or(0);
        self.edit(|f| f.participants = count);
    }

    pub fn submit(&self) {
        let form = self.form.get_untracked();
        let checked = self.tours.with_untracked(|tours| form.validate(tours));

        let mut phase = self.phase.get_untracked();
        match phase.submit(checked) {
            Err(reason) => {
                self.toast.error(reason.to_string(), None);
                self.error.set(Some(reason.into()));
                return;
            }
            // Уже отправляется
            Ok(None) => return,
            Ok(Some(_)) => self.phase.set(phase),
        }

        let vm = *self;
        spawn_local(async move {
            match model::submit(&form).await {
                Ok(confirmation) => {
                    log::info!("Booking {} confirmed", confirmation.id.value());
                    vm.toast.success(
                        "Booking submitted successfully!",
                        Some("We will contact you shortly to confirm your booking.".into()),
                    );
                    vm.phase.update(|p| p.resolve(Ok(confirmation)));
                }
                Err(e) => {
                    log::warn!("Booking rejected: {} {}", e.code, e.message);
                    vm.toast.error("Booking failed", Some(e.message.clone()));
                    if e.details.is_some() {
                        vm.error.set(Some(e.clone().into()));
                    }
                    vm.phase.update(|p| p.resolve(Err(e.message)));
                }
            }
        });
    }

    /// "Book Another Tour"
    pub fn book_another(&self) {
        self.phase.update(|p| p.reset());
        self.form.set(BookingForm::default());
        self.error.set(None);
    }
}
