pub mod get_model;
pub mod search_models;
