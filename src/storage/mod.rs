//! In-memory storage for the catalog

pub mod in_memory;
pub mod store;

pub use in_memory::Collection;
pub use store::CatalogStore;
