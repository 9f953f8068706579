pub mod builder;
pub mod entities;
pub mod ports;
pub mod schema;
pub mod services;
pub mod value_objects;
