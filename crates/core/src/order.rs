//! Delivery order: the sole entity of the dispatch core.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::OrderId;

/// Delivery priority. `Urgente` orders are routed before `Normal` ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgente,
    Normal,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgente => "urgente",
            Priority::Normal => "normal",
        }
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urgente" => Ok(Priority::Urgente),
            "normal" => Ok(Priority::Normal),
            _ => Err(DomainError::validation(
                "priority must be one of: urgente, normal",
            )),
        }
    }
}

/// Order lifecycle status.
///
/// Creation always starts at `Pending`; every later change goes through the
/// set-status operation, never through creation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "in_progress" => Ok(OrderStatus::InProgress),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(DomainError::validation(
                "status must be one of: pending, in_progress, delivered",
            )),
        }
    }
}

/// A delivery order as registered by the accountant.
///
/// Wire names are camelCase to match the browser clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub client_name: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub priority: Priority,
    /// Documents to hand over at the destination, in the order given.
    pub documents: Vec<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Single-line destination address, used when building route stops.
    pub fn address_line(&self) -> String {
        format!("{}, {}, {}", self.street, self.number, self.neighborhood)
    }
}

/// Unvalidated creation input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub client_name: String,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub priority: String,
    pub documents: Vec<String>,
}

impl OrderDraft {
    /// Validate the draft and build the order.
    ///
    /// Every required field must be non-empty after trimming; `priority`
    /// must name a known priority. Document entries are trimmed and empty
    /// ones dropped. Status is always `Pending` regardless of input.
    pub fn into_order(self, id: OrderId, created_at: DateTime<Utc>) -> DomainResult<Order> {
        let client_name = required("clientName", &self.client_name)?;
        let street = required("street", &self.street)?;
        let number = required("number", &self.number)?;
        let neighborhood = required("neighborhood", &self.neighborhood)?;
        let priority: Priority = required("priority", &self.priority)?.parse()?;

        let documents = self
            .documents
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Order {
            id,
            client_name,
            street,
            number,
            neighborhood,
            priority,
            documents,
            status: OrderStatus::Pending,
            created_at,
        })
    }
}

fn required(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!(
            "missing required field: {field}"
        )));
    }
    Ok(trimmed.to_string())
}
