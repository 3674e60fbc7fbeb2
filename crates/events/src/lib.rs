//! Live-update feed for newly created orders.
//!
//! Best-effort fan-out over a lossy broadcast channel: subscribers that lag
//! or disconnect miss events, nothing is queued or retried, and publishing
//! with zero subscribers is valid. Publishers must only announce orders
//! that have already been persisted.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use despacho_core::Order;

/// Event pushed to connected clients.
///
/// Serializes as `{"type":"NEW_ORDER","data":{...order}}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum FeedEvent {
    #[serde(rename = "NEW_ORDER")]
    NewOrder(Order),
}

/// Fan-out handle for order events. Cloning shares the same channel.
#[derive(Debug, Clone)]
pub struct OrderFeed {
    tx: broadcast::Sender<FeedEvent>,
}

impl Default for OrderFeed {
    fn default() -> Self {
        Self::new(256)
    }
}

impl OrderFeed {
    /// Create a feed retaining up to `capacity` undelivered events per
    /// subscriber; older events are dropped for subscribers that lag.
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Publish a newly created order to all current subscribers.
    ///
    /// Fire-and-forget: a send error only means nobody is listening right
    /// now, which is a valid state.
    pub fn publish(&self, order: Order) {
        tracing::debug!(
            order_id = %order.id,
            receivers = self.tx.receiver_count(),
            "publishing NEW_ORDER"
        );
        let _ = self.tx.send(FeedEvent::NewOrder(order));
    }

    /// Register a new listener. Dropping the receiver disconnects it.
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use despacho_core::{OrderId, OrderStatus, Priority};

    use super::*;

    fn order() -> Order {
        Order {
            id: OrderId::new(),
            client_name: "Ana".into(),
            street: "Rua X".into(),
            number: "10".into(),
            neighborhood: "Centro".into(),
            priority: Priority::Urgente,
            documents: vec!["RG".into()],
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn subscriber_receives_published_order() {
        let feed = OrderFeed::default();
        let mut rx = feed.subscribe();

        let o = order();
        feed.publish(o.clone());

        let FeedEvent::NewOrder(received) = rx.recv().await.unwrap();
        assert_eq!(received, o);
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let feed = OrderFeed::default();
        assert_eq!(feed.subscriber_count(), 0);
        feed.publish(order());
    }

    #[test]
    fn wire_shape_matches_the_browser_protocol() {
        let o = order();
        let json = serde_json::to_value(FeedEvent::NewOrder(o.clone())).unwrap();
        assert_eq!(json["type"], "NEW_ORDER");
        assert_eq!(json["data"]["clientName"], "Ana");
        assert_eq!(json["data"]["id"], o.id.to_string());
    }
}
