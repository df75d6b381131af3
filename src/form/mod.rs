pub mod catalog;
pub mod error;
pub mod field_model;
pub mod loader;
pub mod validate;
