//! HTTP routes and handlers, one file per concern.

use axum::Router;

pub mod orders;
pub mod stream;
pub mod system;

pub fn router() -> Router {
    Router::new().nest("/api/orders", orders::router().merge(stream::router()))
}
