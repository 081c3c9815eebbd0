pub mod core;
pub mod error;
pub mod field;
