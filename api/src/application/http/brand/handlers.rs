pub mod get_brand;
pub mod search_brands;
