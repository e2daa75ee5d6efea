pub mod aggregate;
pub mod catalog;
pub mod filter;
pub mod form;
pub mod seed;
