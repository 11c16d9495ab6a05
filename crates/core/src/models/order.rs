//! Order and order-item entities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderItemId, ProductId, UserId};

/// A placed order.
///
/// The owning user is referenced by id but not enforced to exist at write
/// time; group- and user-scoped queries simply skip orders whose owner is
/// gone. `total` is caller-supplied and never recomputed from the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Status string. Well-known values are named by
    /// [`OrderStatus`](crate::types::OrderStatus); arbitrary values are
    /// accepted and stored as-is.
    pub status: String,
    pub total: Decimal,
    /// Stamped by the store at creation; immutable.
    pub created_at: DateTime<Utc>,
    /// Caller-supplied delivery/pickup date; defaults to creation time.
    pub order_date: DateTime<Utc>,
}

/// Data for creating an order. The store assigns id and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: UserId,
    /// Defaults to `"pending"` when absent.
    #[serde(default)]
    pub status: Option<String>,
    pub total: Decimal,
    /// Defaults to the creation time when absent.
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
}

/// A line item of an order.
///
/// `price` is a snapshot of the product's unit price at order time, kept
/// independent of later catalog changes. Items are immutable and only
/// removed when a cascading user deletion removes their parent order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub price: Decimal,
}

/// Data for creating an order item. The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub price: Decimal,
}
