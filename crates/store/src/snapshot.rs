//! On-disk layout of the entity snapshot.
//!
//! Stored under the [`KEY_APP_DATA`](crate::persist::KEY_APP_DATA) document
//! key. Entity maps serialize as arrays of `[id, record]` pairs; the
//! counters record the next id for each monotonic sequence, and
//! `deletedUserIds` carries the recycling free-list across restarts.

use serde::{Deserialize, Serialize};

use canteen_core::{Order, OrderId, OrderItem, OrderItemId, Product, ProductId, User, UserId};

/// Serialized form of the entity store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub users: Vec<(UserId, User)>,
    pub products: Vec<(ProductId, Product)>,
    pub orders: Vec<(OrderId, Order)>,
    pub order_items: Vec<(OrderItemId, OrderItem)>,
    /// High-water mark for user ids (next id on the no-reuse path).
    pub user_id: i32,
    pub product_id: i32,
    pub order_id: i32,
    pub order_item_id: i32,
    /// Freed user ids eligible for reuse, smallest first.
    ///
    /// Absent in documents written before id recycling existed.
    #[serde(default)]
    pub deleted_user_ids: Vec<i32>,
}
