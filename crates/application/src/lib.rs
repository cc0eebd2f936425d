//! Gateway DNS Application Layer
pub mod ports;
pub mod query_context;
pub mod services;
pub mod use_cases;

pub use query_context::QueryContext;
