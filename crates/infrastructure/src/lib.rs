//! Gateway DNS Infrastructure Layer
pub mod dns;
