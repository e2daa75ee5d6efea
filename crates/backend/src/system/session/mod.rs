pub mod directory;
pub mod service;
