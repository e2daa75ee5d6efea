pub mod aggregate;
pub mod form_state;
pub mod pricing;
pub mod seed;
