//! Route planning seam.
//!
//! The core does no geometry. An external directions provider receives an
//! ordered list of stops and returns the actual driving route; the only
//! in-process ordering is [`prioritize`], a stable partition by priority.

use serde::{Deserialize, Serialize};

use crate::id::OrderId;
use crate::order::{Order, Priority};

/// One stop handed to the route planner.
///
/// Carries the originating order id so planner results can be correlated
/// back to orders directly, never by re-deriving and comparing address
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub order_id: OrderId,
    pub address: String,
}

impl Stop {
    pub fn for_order(order: &Order) -> Self {
        Self {
            order_id: order.id,
            address: order.address_line(),
        }
    }
}

/// How the planner may reorder stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMode {
    /// The planner reorders stops for the shortest route.
    Optimized,
    /// Stops are visited exactly in the given order.
    Manual,
}

/// One leg of a planned route, between two consecutive stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub start: Stop,
    pub end: Stop,
    pub distance_meters: u64,
    pub duration_seconds: u64,
}

/// A planned driving route as returned by the external provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    /// Stops in visit order (may differ from the request under
    /// [`RouteMode::Optimized`]).
    pub stops: Vec<Stop>,
    pub legs: Vec<RouteLeg>,
    pub total_distance_meters: u64,
    pub total_duration_seconds: u64,
}

/// External mapping/directions provider.
pub trait RoutePlanner {
    type Error;

    fn plan(&self, stops: &[Stop], mode: RouteMode) -> Result<RoutePlan, Self::Error>;
}

/// Stable partition: every `urgente` order before every `normal` order,
/// insertion order preserved within each group. This is deliberately not a
/// shortest-path computation; geometry belongs to the [`RoutePlanner`].
pub fn prioritize(orders: &[Order]) -> Vec<Order> {
    let (urgent, normal): (Vec<Order>, Vec<Order>) = orders
        .iter()
        .cloned()
        .partition(|o| o.priority == Priority::Urgente);
    urgent.into_iter().chain(normal).collect()
}

/// Google Maps directions deep link for a fixed stop order.
pub fn maps_url(orders: &[Order]) -> String {
    let waypoints: Vec<String> = orders
        .iter()
        .map(|o| {
            format!("{} {} {}", o.street, o.number, o.neighborhood)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("+")
        })
        .collect();
    format!("https://www.google.com/maps/dir/{}", waypoints.join("/"))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use proptest::prelude::*;

    use super::*;
    use crate::order::OrderStatus;

    fn order(name: &str, priority: Priority) -> Order {
        Order {
            id: OrderId::new(),
            client_name: name.to_string(),
            street: "Rua X".into(),
            number: "10".into(),
            neighborhood: "Centro".into(),
            priority,
            documents: Vec::new(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn urgent_orders_come_first_in_insertion_order() {
        let orders = vec![
            order("A", Priority::Normal),
            order("B", Priority::Urgente),
            order("C", Priority::Normal),
            order("D", Priority::Urgente),
        ];

        let routed = prioritize(&orders);
        let names: Vec<&str> = routed.iter().map(|o| o.client_name.as_str()).collect();
        assert_eq!(names, ["B", "D", "A", "C"]);
    }

    #[test]
    fn all_normal_is_left_untouched() {
        let orders = vec![order("A", Priority::Normal), order("B", Priority::Normal)];
        let routed = prioritize(&orders);
        assert_eq!(routed, orders);
    }

    #[test]
    fn maps_url_joins_waypoints_with_plus() {
        let mut a = order("A", Priority::Normal);
        a.street = "Rua das Flores".into();
        let b = order("B", Priority::Normal);

        let url = maps_url(&[a, b]);
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/Rua+das+Flores+10+Centro/Rua+X+10+Centro"
        );
    }

    #[test]
    fn stop_carries_the_order_id() {
        let o = order("A", Priority::Urgente);
        let stop = Stop::for_order(&o);
        assert_eq!(stop.order_id, o.id);
        assert_eq!(stop.address, "Rua X, 10, Centro");
    }

    proptest! {
        #[test]
        fn prioritize_is_a_stable_partition(flags in proptest::collection::vec(any::<bool>(), 0..32)) {
            let orders: Vec<Order> = flags
                .iter()
                .enumerate()
                .map(|(i, urgent)| {
                    let p = if *urgent { Priority::Urgente } else { Priority::Normal };
                    order(&format!("client-{i}"), p)
                })
                .collect();

            let routed = prioritize(&orders);
            prop_assert_eq!(routed.len(), orders.len());

            let split = routed
                .iter()
                .take_while(|o| o.priority == Priority::Urgente)
                .count();
            prop_assert!(routed[split..].iter().all(|o| o.priority == Priority::Normal));

            for priority in [Priority::Urgente, Priority::Normal] {
                let before: Vec<OrderId> = orders
                    .iter()
                    .filter(|o| o.priority == priority)
                    .map(|o| o.id)
                    .collect();
                let after: Vec<OrderId> = routed
                    .iter()
                    .filter(|o| o.priority == priority)
                    .map(|o| o.id)
                    .collect();
                prop_assert_eq!(before, after);
            }
        }
    }
}
