//! Resolving weak car references from orders

use uuid::Uuid;

use crate::entities::car::Car;

/// Resolve a car id against a catalog snapshot.
///
/// Returns `None` when no car matches. A dangling reference is an expected
/// state, not an error: the referenced listing may have been deleted after
/// the order came in, and the detail view simply renders nothing for it.
/// Linear scan; the catalog stays small enough that an index would buy
/// nothing.
pub fn find_car_by_id(cars: &[Car], car_id: Uuid) -> Option<&Car> {
    cars.iter().find(|car| car.id == car_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::car::sample_input;

    #[test]
    fn resolves_a_listed_car() {
        let cars = vec![
            Car::new(&sample_input()).unwrap(),
            Car::new(&sample_input()).unwrap(),
        ];
        let found = find_car_by_id(&cars, cars[1].id).unwrap();
        assert_eq!(found.id, cars[1].id);
    }

    #[test]
    fn dangling_reference_resolves_to_none() {
        let cars = vec![Car::new(&sample_input()).unwrap()];
        assert!(find_car_by_id(&cars, Uuid::new_v4()).is_none());
        assert!(find_car_by_id(&[], Uuid::new_v4()).is_none());
    }
}
