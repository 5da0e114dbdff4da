mod types;

pub use types::{DataSource, FruitListing, LISTING_STATUS};
