pub mod a001_tour;
pub mod a002_booking;
pub mod a003_feedback;
