//! Pure view-model queries over catalog snapshots
//!
//! Nothing in this module mutates state: every function takes a snapshot of
//! the store's collections and derives the projection a widget renders. The
//! filter and sort selectors parse from the raw strings select widgets emit.

pub mod lookup;

use std::str::FromStr;

use serde::Serialize;

use crate::core::error::ValidationError;
use crate::entities::car::Car;
use crate::entities::order::{Order, OrderStatus};

/// Status selector for the orders table.
///
/// `All` is the widget's "show everything" option; it is a filter value,
/// not a storable status, which is why it lives here and not on
/// [`OrderStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    const ALL_VALUE: &'static str = "all";

    /// Does the given order pass this filter?
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_VALUE {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only).map_err(|_| {
            let mut allowed = vec![Self::ALL_VALUE];
            allowed.extend_from_slice(OrderStatus::VALUES);
            ValidationError::unknown_value("status", s, &allowed)
        })
    }
}

/// Sort direction for the orders table; the panel opens newest-first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// The opposite direction, for the column-header toggle
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(ValidationError::unknown_value(
                "sort",
                other,
                &["asc", "desc"],
            )),
        }
    }
}

/// Keep the orders passing the filter, in input order
pub fn filter_orders_by_status(orders: &[Order], filter: StatusFilter) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| filter.matches(order))
        .cloned()
        .collect()
}

/// Sort orders by creation date.
///
/// The sort is stable: orders sharing a timestamp keep their relative input
/// order in both directions.
pub fn sort_orders_by_date(mut orders: Vec<Order>, direction: SortDirection) -> Vec<Order> {
    orders.sort_by(|a, b| match direction {
        SortDirection::Asc => a.created_at.cmp(&b.created_at),
        SortDirection::Desc => b.created_at.cmp(&a.created_at),
    });
    orders
}

/// Aggregate counters for the orders table header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OrderStats {
    /// All orders, regardless of status
    pub total: usize,
    /// Orders closed successfully
    pub completed: usize,
    /// Orders still needing attention (reviewing or in transit)
    pub pending: usize,
}

/// Count orders by outcome
pub fn order_stats(orders: &[Order]) -> OrderStats {
    OrderStats {
        total: orders.len(),
        completed: orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .count(),
        pending: orders.iter().filter(|o| o.status.is_pending()).count(),
    }
}

/// The four overview tiles: car count plus the order counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CatalogStats {
    pub cars: usize,
    #[serde(flatten)]
    pub orders: OrderStats,
}

/// Aggregate the overview tab's numbers in one pass
pub fn catalog_stats(cars: &[Car], orders: &[Order]) -> CatalogStats {
    CatalogStats {
        cars: cars.len(),
        orders: order_stats(orders),
    }
}

/// The first `n` records of a snapshot (the overview's "recently added"
/// lists; the store keeps newest first)
pub fn recent<T>(records: &[T], n: usize) -> &[T] {
    &records[..records.len().min(n)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn order(status: OrderStatus, age_days: i64) -> Order {
        Order {
            id: Uuid::new_v4(),
            phone_number: "+79160000000".to_string(),
            car_id: Uuid::new_v4(),
            car_brand: "Lada".to_string(),
            car_model: "Vesta".to_string(),
            created_at: Utc::now() - Duration::days(age_days),
            status,
        }
    }

    #[test]
    fn filter_all_is_the_identity() {
        let orders = vec![
            order(OrderStatus::Created, 3),
            order(OrderStatus::Completed, 2),
            order(OrderStatus::Cancelled, 1),
        ];
        assert_eq!(filter_orders_by_status(&orders, StatusFilter::All), orders);
    }

    #[test]
    fn filter_keeps_matches_in_input_order() {
        let orders = vec![
            order(OrderStatus::Created, 5),
            order(OrderStatus::Reviewing, 4),
            order(OrderStatus::Created, 3),
        ];
        let created =
            filter_orders_by_status(&orders, StatusFilter::Only(OrderStatus::Created));
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].id, orders[0].id);
        assert_eq!(created[1].id, orders[2].id);
    }

    #[test]
    fn filter_parses_widget_strings() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "in_transit".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(OrderStatus::InTransit))
        );
        let err = "everything".parse::<StatusFilter>().unwrap_err();
        assert!(err.message.contains("all"));
    }

    #[test]
    fn sort_orders_both_directions() {
        let oldest = order(OrderStatus::Created, 9);
        let middle = order(OrderStatus::Created, 5);
        let newest = order(OrderStatus::Created, 1);
        let orders = vec![middle.clone(), newest.clone(), oldest.clone()];

        let asc = sort_orders_by_date(orders.clone(), SortDirection::Asc);
        let asc_ids: Vec<_> = asc.iter().map(|o| o.id).collect();
        assert_eq!(asc_ids, [oldest.id, middle.id, newest.id]);

        let desc = sort_orders_by_date(orders, SortDirection::Desc);
        let desc_ids: Vec<_> = desc.iter().map(|o| o.id).collect();
        assert_eq!(desc_ids, [newest.id, middle.id, oldest.id]);
    }

    #[test]
    fn sort_is_idempotent() {
        let orders = vec![
            order(OrderStatus::Created, 5),
            order(OrderStatus::Created, 9),
            order(OrderStatus::Created, 1),
        ];
        let once = sort_orders_by_date(orders, SortDirection::Asc);
        let twice = sort_orders_by_date(once.clone(), SortDirection::Asc);
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_preserves_order_of_equal_timestamps() {
        let stamp = Utc::now();
        let mut a = order(OrderStatus::Created, 0);
        let mut b = order(OrderStatus::Reviewing, 0);
        let mut c = order(OrderStatus::Completed, 0);
        a.created_at = stamp;
        b.created_at = stamp;
        c.created_at = stamp;
        let orders = vec![a.clone(), b.clone(), c.clone()];

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let sorted = sort_orders_by_date(orders.clone(), direction);
            let ids: Vec<_> = sorted.iter().map(|o| o.id).collect();
            assert_eq!(ids, [a.id, b.id, c.id]);
        }
    }

    #[test]
    fn stats_on_empty_collection_are_zero() {
        assert_eq!(order_stats(&[]), OrderStats::default());
    }

    #[test]
    fn stats_count_completed_and_pending() {
        let orders = vec![
            order(OrderStatus::Created, 3),
            order(OrderStatus::Completed, 2),
            order(OrderStatus::InTransit, 1),
        ];
        assert_eq!(
            order_stats(&orders),
            OrderStats {
                total: 3,
                completed: 1,
                pending: 1,
            }
        );
    }

    #[test]
    fn catalog_stats_flatten_for_the_overview() {
        let orders = vec![order(OrderStatus::Reviewing, 1)];
        let stats = catalog_stats(&[], &orders);
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["cars"], 0);
        assert_eq!(json["total"], 1);
        assert_eq!(json["pending"], 1);
    }

    #[test]
    fn recent_takes_at_most_n() {
        let orders = vec![order(OrderStatus::Created, 2), order(OrderStatus::Created, 1)];
        assert_eq!(recent(&orders, 3).len(), 2);
        assert_eq!(recent(&orders, 1)[0].id, orders[0].id);
        assert!(recent(&orders, 0).is_empty());
    }
}
