//! Entity trait defining the shared shape of catalog records

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for all records held by the catalog store.
///
/// Every record carries:
/// - id: opaque unique identifier, assigned by the store at creation
/// - created_at: creation timestamp, set once and never mutated
///
/// The store is generic over this trait so cars and orders share one
/// collection implementation.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The singular resource name used in error reports (e.g. "car")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;
}
