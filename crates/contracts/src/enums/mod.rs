pub mod booking_status;
pub mod payment_status;
pub mod tour_status;
pub mod user_role;
