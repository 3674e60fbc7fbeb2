//! Domain model for the delivery-dispatch core.
//!
//! Everything in here is synchronous and infrastructure-free: the order
//! entity and its validation, the error taxonomy, and the route-planner
//! seam. Persistence and transport live in sibling crates.

pub mod error;
pub mod id;
pub mod order;
pub mod route;

pub use error::{DomainError, DomainResult};
pub use id::OrderId;
pub use order::{Order, OrderDraft, OrderStatus, Priority};
pub use route::{maps_url, prioritize, RouteLeg, RouteMode, RoutePlan, RoutePlanner, Stop};
