pub mod get_listing;
pub mod search_listings;
