pub mod advanced_search;
pub mod get_filter_options;
pub mod get_suggestions;
pub mod global_search;
