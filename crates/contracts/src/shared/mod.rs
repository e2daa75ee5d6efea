pub mod api_error;
pub mod format;
pub mod validation;
