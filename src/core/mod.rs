pub mod catalog;
pub mod manager;

pub use crate::domain::model::Book;
pub use crate::domain::ports::CatalogStore;
pub use crate::utils::error::Result;
