use std::sync::Arc;

use crate::domain::a001_tour::provider::{SeedTourProvider, TourProvider};
use crate::domain::a002_booking::repository::BookingRepository;
use crate::domain::a003_feedback::repository::ReviewRepository;
use crate::shared::config::{self, Config};
use crate::system::session::directory::SessionDirectory;

/// Общее состояние, передаваемое во все обработчики
#[derive(Clone)]
pub struct AppState {
    pub tours: Arc<dyn TourProvider>,
    pub bookings: Arc<BookingRepository>,
    pub reviews: Arc<ReviewRepository>,
    pub sessions: Arc<SessionDirectory>,
}

impl AppState {
    pub fn new(tours: Arc<dyn TourProvider>) -> Self {
        Self {
            tours,
            bookings: Arc::new(BookingRepository::with_samples()),
            reviews: Arc::new(ReviewRepository::with_samples()),
            sessions: Arc::new(SessionDirectory::with_demo_accounts()),
        }
    }

    /// Состояние с каталогом из конфигурации (файл или встроенный)
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = match config::get_seed_path(config) {
            Some(path) => {
                tracing::info!("Loading tour catalog from {}", path.display());
                SeedTourProvider::load(&path)?
            }
            None => {
                tracing::info!("Using built-in tour catalog");
                SeedTourProvider::builtin()
            }
        };
        tracing::info!("Catalog ready: {} tours", provider.len());
        Ok(Self::new(Arc::new(provider)))
    }
}
