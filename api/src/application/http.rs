pub mod brand;
pub mod category;
pub mod health;
pub mod listing;
pub mod model;
pub mod part;
pub mod query_builder;
pub mod query_extractor;
pub mod query_params;
pub mod search;
pub mod server;
