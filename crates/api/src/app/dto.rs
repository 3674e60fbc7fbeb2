//! Request DTOs and JSON mapping.

use serde::Deserialize;

use despacho_core::OrderDraft;

/// Body of `POST /api/orders`.
///
/// Absent fields deserialize to empty values so the domain validation can
/// report them as 400s instead of a framework-level deserialize rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl From<CreateOrderRequest> for OrderDraft {
    fn from(req: CreateOrderRequest) -> Self {
        OrderDraft {
            client_name: req.client_name,
            street: req.street,
            number: req.number,
            neighborhood: req.neighborhood,
            priority: req.priority,
            documents: req.documents,
        }
    }
}

/// Body of `PUT /api/orders/:id/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: String,
}

/// Query parameters of `GET /api/orders`.
#[derive(Debug, Default, Deserialize)]
pub struct ListOrdersQuery {
    pub role: Option<String>,
    pub status: Option<String>,
}
