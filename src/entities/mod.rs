//! Catalog record types: cars, orders and their closed value sets

pub mod car;
mod macros;
pub mod order;

pub use car::{BodyType, Car, CarInput, DriveType, EngineType, Transmission};
pub use order::{Order, OrderStatus};
