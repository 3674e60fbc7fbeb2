//! The order service: business rules orchestrating store and feed.

use chrono::Utc;
use thiserror::Error;

use despacho_core::{DomainError, Order, OrderDraft, OrderId, OrderStatus};
use despacho_events::OrderFeed;
use despacho_store::{JsonFileStore, StoreError};

/// Failures surfaced by the order service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Which orders a listing should return. Both filters compose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderFilter {
    /// The office-boy view is restricted to pending orders.
    pub pending_only: bool,
    /// Exact status match.
    pub status: Option<OrderStatus>,
}

/// Application services shared by all HTTP handlers.
///
/// Every mutation is a full load → modify → save_all pass over the store;
/// see `JsonFileStore` for the accepted write race.
#[derive(Debug, Clone)]
pub struct AppServices {
    store: JsonFileStore,
    feed: OrderFeed,
}

impl AppServices {
    pub fn new(store: JsonFileStore) -> Self {
        Self {
            store,
            feed: OrderFeed::default(),
        }
    }

    pub fn feed(&self) -> &OrderFeed {
        &self.feed
    }

    /// Register a new order: validate, persist, then announce it.
    ///
    /// The feed publish happens only after the save succeeded, so listeners
    /// never see an order that is not in the store. A validation failure
    /// leaves both the store and the feed untouched.
    pub fn create_order(&self, draft: OrderDraft) -> Result<Order, ServiceError> {
        let order = draft.into_order(OrderId::new(), Utc::now())?;

        let mut orders = self.store.load();
        orders.push(order.clone());
        self.store.save_all(&orders)?;

        tracing::info!(order_id = %order.id, priority = %order.priority, "order created");
        self.feed.publish(order.clone());
        Ok(order)
    }

    /// List orders in insertion order, optionally filtered.
    pub fn list_orders(&self, filter: OrderFilter) -> Vec<Order> {
        let mut orders = self.store.load();
        if filter.pending_only {
            orders.retain(|o| o.status == OrderStatus::Pending);
        }
        if let Some(status) = filter.status {
            orders.retain(|o| o.status == status);
        }
        orders
    }

    /// Move an order to a new status and persist the whole collection.
    pub fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, ServiceError> {
        let mut orders = self.store.load();
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(DomainError::NotFound)?;

        order.status = status;
        let updated = order.clone();
        self.store.save_all(&orders)?;

        tracing::info!(order_id = %updated.id, status = %updated.status, "order status changed");
        Ok(updated)
    }
}
