//! The catalog store: sole owner of the car and order collections
//!
//! Every mutation is funneled through the operations here, keeping the
//! single-writer invariant: presentation widgets never touch the
//! collections directly. Reads always observe the post-mutation state.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::{CatalogError, NotFoundError, Result};
use crate::entities::car::{Car, CarInput};
use crate::entities::order::{Order, OrderStatus};
use crate::storage::in_memory::Collection;

/// Shareable handle to the in-memory catalog.
///
/// Cloning is cheap and every clone sees the same collections, so each
/// panel tab can hold its own handle. Uses `RwLock` for interior
/// mutability; the execution model is still one logical writer.
#[derive(Clone)]
pub struct CatalogStore {
    cars: Arc<RwLock<Collection<Car>>>,
    orders: Arc<RwLock<Collection<Order>>>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            cars: Arc::new(RwLock::new(Collection::new())),
            orders: Arc::new(RwLock::new(Collection::new())),
        }
    }

    /// Build a store from pre-existing records, preserving their list order
    pub fn from_records(
        cars: impl IntoIterator<Item = Car>,
        orders: impl IntoIterator<Item = Order>,
    ) -> Self {
        Self {
            cars: Arc::new(RwLock::new(Collection::from_records(cars))),
            orders: Arc::new(RwLock::new(Collection::from_records(orders))),
        }
    }

    // === Car commands ===

    /// Validate raw form input and add a new listing at the front of the
    /// catalog. The store assigns the id and timestamp; the stored record
    /// is returned.
    pub fn add_car(&self, input: &CarInput) -> Result<Car> {
        let car = Car::new(input).inspect_err(|e| {
            warn!(field = e.field, error = %e, "rejected car input");
        })?;
        write(&self.cars)?.prepend(car.clone());
        debug!(car_id = %car.id, brand = %car.brand, model = %car.model, "car added");
        Ok(car)
    }

    /// Replace every mutable field of an existing listing. `id` and
    /// `created_at` are preserved; the record keeps its list position.
    pub fn update_car(&self, id: Uuid, input: &CarInput) -> Result<Car> {
        let mut cars = write(&self.cars)?;
        let existing = cars
            .get(id)
            .ok_or_else(|| NotFoundError::new(Car::resource_name(), id))?;
        let updated = existing.with_input(input).inspect_err(|e| {
            warn!(car_id = %id, field = e.field, error = %e, "rejected car input");
        })?;
        cars.replace(updated.clone())?;
        debug!(car_id = %id, "car updated");
        Ok(updated)
    }

    /// Remove a listing. Orders referencing it are left alone; their
    /// `car_id` simply stops resolving. Fails with `NotFound` when the id
    /// is absent.
    pub fn delete_car(&self, id: Uuid) -> Result<()> {
        write(&self.cars)?.remove(id)?;
        debug!(car_id = %id, "car deleted");
        Ok(())
    }

    // === Order commands ===

    /// Remove an inquiry. Fails with `NotFound` when the id is absent.
    pub fn delete_order(&self, id: Uuid) -> Result<()> {
        write(&self.orders)?.remove(id)?;
        debug!(order_id = %id, "order deleted");
        Ok(())
    }

    /// Move an inquiry to a new status. The raw widget string is parsed
    /// first, so an unrecognized value is rejected before the store is
    /// touched; every other field is left as is.
    pub fn set_order_status(&self, id: Uuid, status: &str) -> Result<Order> {
        let status: OrderStatus = status.parse().inspect_err(|e| {
            warn!(order_id = %id, error = %e, "rejected order status");
        })?;

        let mut orders = write(&self.orders)?;
        let mut order = orders
            .get(id)
            .cloned()
            .ok_or_else(|| NotFoundError::new(Order::resource_name(), id))?;
        order.status = status;
        orders.replace(order.clone())?;
        debug!(order_id = %id, status = %status, "order status changed");
        Ok(order)
    }

    // === Read queries ===

    /// Snapshot of all listings, newest first
    pub fn cars(&self) -> Result<Vec<Car>> {
        Ok(read(&self.cars)?.all())
    }

    /// Snapshot of all inquiries in list order
    pub fn orders(&self) -> Result<Vec<Order>> {
        Ok(read(&self.orders)?.all())
    }

    /// Resolve a car id, `None` when the listing no longer exists
    pub fn car_by_id(&self, id: Uuid) -> Result<Option<Car>> {
        Ok(read(&self.cars)?.get(id).cloned())
    }

    /// Resolve an order id, `None` when the inquiry no longer exists
    pub fn order_by_id(&self, id: Uuid) -> Result<Option<Order>> {
        Ok(read(&self.orders)?.get(id).cloned())
    }

    pub fn car_count(&self) -> Result<usize> {
        Ok(read(&self.cars)?.len())
    }

    pub fn order_count(&self) -> Result<usize> {
        Ok(read(&self.orders)?.len())
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("cars", &self.car_count().unwrap_or(0))
            .field("orders", &self.order_count().unwrap_or(0))
            .finish()
    }
}

fn read<'a, T: Entity>(
    lock: &'a RwLock<Collection<T>>,
) -> Result<RwLockReadGuard<'a, Collection<T>>> {
    lock.read().map_err(|e| {
        CatalogError::Internal(format!(
            "failed to acquire {} read lock: {}",
            T::resource_name(),
            e
        ))
    })
}

fn write<'a, T: Entity>(
    lock: &'a RwLock<Collection<T>>,
) -> Result<RwLockWriteGuard<'a, Collection<T>>> {
    lock.write().map_err(|e| {
        CatalogError::Internal(format!(
            "failed to acquire {} write lock: {}",
            T::resource_name(),
            e
        ))
    })
}
