//! Core module containing fundamental traits and types for the catalog

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{CatalogError, NotFoundError, ValidationError};
