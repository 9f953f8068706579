pub mod get_category;
pub mod search_categories;
