pub mod footer;
pub mod header;
pub mod toast_service;
