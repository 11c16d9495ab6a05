//! Shared fixtures for the store integration tests.

use rust_decimal::Decimal;
use tempfile::TempDir;

use canteen_core::{GroupName, NewOrder, NewOrderItem, NewProduct, NewUser, OrderId, ProductId, UserId};
use canteen_store::Store;

/// Open a store backed by a data file in a fresh temporary directory.
///
/// The directory handle must stay alive for the store's lifetime; dropping
/// it deletes the data file.
#[must_use]
pub fn open_temp_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let store = Store::open(dir.path().join("app-data.json"));
    (dir, store)
}

/// A regular member of `group` with no role flags.
#[must_use]
pub fn member(username: &str, group: &str) -> NewUser {
    NewUser {
        username: username.to_owned(),
        password: "opaque-credential-blob".to_owned(),
        first_name: "Test".to_owned(),
        last_name: "Member".to_owned(),
        group_name: GroupName::new(group),
        email: format!("{username}@example.com"),
        is_coordinator: false,
        is_admin: false,
        is_user_admin: false,
    }
}

/// A catalog product.
#[must_use]
pub fn product(name: &str, category: &str, cents: i64) -> NewProduct {
    NewProduct {
        name: name.to_owned(),
        description: format!("{name} description"),
        price: Decimal::new(cents, 2),
        category: category.to_owned(),
        available: None,
    }
}

/// An order for `user_id` with defaulted status and date.
#[must_use]
pub fn order(user_id: UserId, cents: i64) -> NewOrder {
    NewOrder {
        user_id,
        status: None,
        total: Decimal::new(cents, 2),
        order_date: None,
    }
}

/// A line item snapshotting a unit price.
#[must_use]
pub fn item(order_id: OrderId, product_id: ProductId, quantity: i32, cents: i64) -> NewOrderItem {
    NewOrderItem {
        order_id,
        product_id,
        quantity,
        price: Decimal::new(cents, 2),
    }
}
