pub mod bookings;
pub mod layout;
pub mod overview;
pub mod profile;
pub mod settings;
pub mod tour_management;
