//! Order records (purchase inquiries tied to a car)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::Entity;
use crate::entities::car::Car;
use crate::value_enum;

value_enum!(
    /// Where a purchase inquiry stands.
    ///
    /// The closed set of stored values; the transition command parses its
    /// raw input through here, so nothing else ever reaches a record.
    OrderStatus, "status", {
        Created => "created",
        Reviewing => "reviewing",
        InTransit => "in_transit",
        Cancelled => "cancelled",
        Completed => "completed",
    }
);

impl OrderStatus {
    /// Statuses that still need operator attention
    pub fn is_pending(&self) -> bool {
        matches!(self, OrderStatus::Reviewing | OrderStatus::InTransit)
    }
}

/// A purchase inquiry.
///
/// `car_id` is a weak reference: it resolves through the lookup query when
/// the car still exists and quietly fails to resolve when it was deleted.
/// `car_brand`/`car_model` snapshot the car at inquiry time, so later edits
/// to the listing never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Opaque unique identifier, immutable
    pub id: Uuid,
    pub phone_number: String,
    /// Lookup-only reference to the inquired car
    pub car_id: Uuid,
    pub car_brand: String,
    pub car_model: String,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

impl Order {
    /// Build an inquiry for a listed car, snapshotting its brand and model.
    /// New inquiries start in [`OrderStatus::Created`].
    pub fn for_car(phone_number: impl Into<String>, car: &Car) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            car_id: car.id,
            car_brand: car.brand.clone(),
            car_model: car.model.clone(),
            created_at: Utc::now(),
            status: OrderStatus::Created,
        }
    }
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "order"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::car::sample_input;

    #[test]
    fn status_parse_rejects_unknown_value() {
        assert_eq!("in_transit".parse::<OrderStatus>(), Ok(OrderStatus::InTransit));
        let err = "shipped".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.field, "status");
    }

    #[test]
    fn pending_covers_reviewing_and_in_transit() {
        let pending: Vec<_> = OrderStatus::ALL
            .iter()
            .filter(|s| s.is_pending())
            .collect();
        assert_eq!(pending, [&OrderStatus::Reviewing, &OrderStatus::InTransit]);
    }

    #[test]
    fn for_car_snapshots_brand_and_model() {
        let car = Car::new(&sample_input()).unwrap();
        let order = Order::for_car("+79161234567", &car);
        assert_eq!(order.car_id, car.id);
        assert_eq!(order.car_brand, car.brand);
        assert_eq!(order.car_model, car.model);
        assert_eq!(order.status, OrderStatus::Created);
    }

    #[test]
    fn record_serializes_camel_case() {
        let car = Car::new(&sample_input()).unwrap();
        let order = Order::for_car("+79161234567", &car);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["carBrand"], "Toyota");
        assert_eq!(json["status"], "created");
        assert_eq!(json["phoneNumber"], "+79161234567");
    }
}
