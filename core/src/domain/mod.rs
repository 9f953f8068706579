pub mod catalog;
pub mod common;
pub mod health;
pub mod search;
