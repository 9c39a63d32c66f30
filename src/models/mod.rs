//! Domain models.

mod category;

pub use category::Category;
