pub mod page_header;
pub mod star_rating;
pub mod stat_card;
pub mod ui;

pub use page_header::PageHeader;
pub use star_rating::{StarRating, StarRatingInput};
pub use stat_card::StatCard;
