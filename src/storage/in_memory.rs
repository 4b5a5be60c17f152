//! Insertion-ordered collections backing the catalog store

use indexmap::IndexMap;
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::core::error::NotFoundError;

/// An insertion-ordered collection of records keyed by id.
///
/// The admin panel renders lists in collection order (newest first), so
/// order is part of the contract and the records sit in an `IndexMap`
/// rather than a plain `HashMap`. Removal keeps the relative order of the
/// survivors.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    records: IndexMap<Uuid, T>,
}

impl<T: Entity> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// Build a collection from records, preserving the given order.
    /// A duplicate id keeps the later record.
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id(), r)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.records.contains_key(&id)
    }

    /// Get a record by id
    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.records.get(&id)
    }

    /// Insert a new record at the front (newest first)
    pub fn prepend(&mut self, record: T) {
        self.records.shift_insert(0, record.id(), record);
    }

    /// Replace the record with the same id, keeping its list position
    pub fn replace(&mut self, record: T) -> Result<(), NotFoundError> {
        let id = record.id();
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(NotFoundError::new(T::resource_name(), id)),
        }
    }

    /// Remove a record by id, closing the gap it leaves
    pub fn remove(&mut self, id: Uuid) -> Result<T, NotFoundError> {
        self.records
            .shift_remove(&id)
            .ok_or_else(|| NotFoundError::new(T::resource_name(), id))
    }

    /// Snapshot the collection in list order
    pub fn all(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Iterate the records in list order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::car::{Car, sample_input};

    fn car(brand: &str) -> Car {
        let mut input = sample_input();
        input.brand = brand.to_string();
        Car::new(&input).unwrap()
    }

    #[test]
    fn prepend_keeps_newest_first() {
        let mut cars = Collection::new();
        cars.prepend(car("Lada"));
        cars.prepend(car("Kia"));
        cars.prepend(car("BMW"));

        let brands: Vec<_> = cars.iter().map(|c| c.brand.as_str()).collect();
        assert_eq!(brands, ["BMW", "Kia", "Lada"]);
    }

    #[test]
    fn replace_keeps_list_position() {
        let mut cars = Collection::from_records([car("Lada"), car("Kia"), car("BMW")]);
        let middle = cars.all()[1].clone();

        let mut updated = middle.clone();
        updated.brand = "Kia Motors".to_string();
        cars.replace(updated).unwrap();

        let brands: Vec<_> = cars.iter().map(|c| c.brand.as_str()).collect();
        assert_eq!(brands, ["Lada", "Kia Motors", "BMW"]);
    }

    #[test]
    fn replace_missing_id_reports_not_found() {
        let mut cars: Collection<Car> = Collection::new();
        let stray = car("Lada");
        let err = cars.replace(stray.clone()).unwrap_err();
        assert_eq!(err.resource, "car");
        assert_eq!(err.id, stray.id);
    }

    #[test]
    fn remove_closes_the_gap() {
        let mut cars = Collection::from_records([car("Lada"), car("Kia"), car("BMW")]);
        let middle_id = cars.all()[1].id;

        let removed = cars.remove(middle_id).unwrap();
        assert_eq!(removed.brand, "Kia");

        let brands: Vec<_> = cars.iter().map(|c| c.brand.as_str()).collect();
        assert_eq!(brands, ["Lada", "BMW"]);
        assert!(cars.remove(middle_id).is_err());
    }
}
