pub mod errors;
pub mod filter;
pub mod query;

pub use errors::*;
pub use filter::*;
pub use query::*;
