//! # AutoMir Catalog Core
//!
//! The state-management core of a vehicle-sales admin panel: an in-memory
//! catalog of cars and purchase inquiries with a closed command set and pure
//! view-model queries. Presentation is someone else's job; this crate owns
//! the data and the rules.
//!
//! ## Architecture
//!
//! - **Catalog store** ([`storage`]): sole owner of the car and order
//!   collections; all mutation goes through its operations.
//! - **Command boundary** ([`commands`]): the closed set of mutations a
//!   widget may request, carrying raw, not-yet-validated form payloads.
//! - **Query engine** ([`query`]): pure filter/sort/aggregate functions
//!   deriving the view-models the tables and overview tiles render.
//! - **Entities** ([`entities`]): the record types and their closed value
//!   sets, each with a validating parse that rejects unknown values.
//!
//! ## Quick Start
//!
//! ```rust
//! use automir::prelude::*;
//!
//! let store = CatalogStore::with_sample_data();
//!
//! // Mutate through the command boundary
//! let cars = store.cars()?;
//! let outcome = store.execute(Command::DeleteCar { id: cars[0].id })?;
//! assert!(matches!(outcome, CommandOutcome::Deleted { .. }));
//!
//! // Derive view-models with pure queries
//! let orders = sort_orders_by_date(store.orders()?, SortDirection::Desc);
//! let stats = order_stats(&orders);
//! assert_eq!(stats.total, orders.len());
//! # Ok::<(), CatalogError>(())
//! ```

pub mod commands;
pub mod core;
pub mod entities;
pub mod query;
pub mod seed;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    // === Core ===
    pub use crate::core::entity::Entity;
    pub use crate::core::error::{CatalogError, NotFoundError, Result, ValidationError};

    // === Entities ===
    pub use crate::entities::car::{
        BodyType, Car, CarInput, DriveType, EngineType, Transmission,
    };
    pub use crate::entities::order::{Order, OrderStatus};

    // === Store and commands ===
    pub use crate::commands::{Command, CommandOutcome};
    pub use crate::storage::store::CatalogStore;

    // === Queries ===
    pub use crate::query::lookup::find_car_by_id;
    pub use crate::query::{
        CatalogStats, OrderStats, SortDirection, StatusFilter, catalog_stats,
        filter_orders_by_status, order_stats, recent, sort_orders_by_date,
    };

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use uuid::Uuid;
}
