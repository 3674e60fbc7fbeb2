//! Order CRUD endpoints.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
    Json, Router,
};

use despacho_core::{OrderId, OrderStatus};

use crate::app::services::{AppServices, OrderFilter};
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id/status", put(set_status))
}

/// POST /api/orders
///
/// 201 with the created order; 400 if a required field is missing/empty or
/// the priority is unknown.
pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateOrderRequest>,
) -> axum::response::Response {
    match services.create_order(body.into()) {
        Ok(order) => (StatusCode::CREATED, Json(order)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

/// GET /api/orders?role=officeboy&status=<status>
///
/// Both query parameters are optional and compose; `role=officeboy`
/// restricts to pending orders.
pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListOrdersQuery>,
) -> axum::response::Response {
    let status = match query.status.as_deref() {
        Some(s) => match s.parse::<OrderStatus>() {
            Ok(v) => Some(v),
            Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
        },
        None => None,
    };

    let filter = OrderFilter {
        pending_only: query.role.as_deref() == Some("officeboy"),
        status,
    };

    Json(services.list_orders(filter)).into_response()
}

/// PUT /api/orders/:id/status
///
/// 200 with the updated order; 404 when the id is unknown (or not an order
/// id at all); 400 for an unknown status value.
pub async fn set_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::SetStatusRequest>,
) -> axum::response::Response {
    let id: OrderId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::NOT_FOUND, "Order not found"),
    };

    let status: OrderStatus = match body.status.parse() {
        Ok(v) => v,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match services.set_status(id, status) {
        Ok(order) => Json(order).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
