//! Content categories
//!
//! A fixed, ordered table of categories used to classify content, with
//! lookups, schema validation and a small CLI.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;

pub use catalog::CATEGORIES;
pub use models::Category;
