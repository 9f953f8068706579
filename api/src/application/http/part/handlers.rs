pub mod get_compatible_models;
pub mod get_part;
pub mod search_parts;
