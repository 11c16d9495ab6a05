//! Explicit bootstrap step.
//!
//! Creates the two privileged accounts and the starter catalog. This runs
//! once at initialization (e.g. via `canteen seed`), decoupled from
//! [`Store::create_user`] - the create path itself only ever honors
//! caller-supplied role flags.

use rust_decimal::Decimal;

use canteen_core::{ADMIN_GROUP, GroupName, NewProduct, NewUser};

use crate::store::Store;

/// Username of the primary administrator account.
pub const PRIMARY_ADMIN_USERNAME: &str = "admin@canteen.local";

/// Username of the account-management administrator account.
pub const USER_ADMIN_USERNAME: &str = "accounts@canteen.local";

/// Seed the bootstrap admin accounts and, on a fresh catalog, the starter
/// products. Idempotent - existing accounts and a non-empty catalog are
/// left alone.
///
/// Password hashes are opaque blobs produced by the authentication layer;
/// the store never hashes anything itself.
pub fn seed_store(store: &mut Store, admin_password_hash: &str, user_admin_password_hash: &str) {
    if store.user_by_username(PRIMARY_ADMIN_USERNAME).is_none() {
        let admin = store.create_user(NewUser {
            username: PRIMARY_ADMIN_USERNAME.to_owned(),
            password: admin_password_hash.to_owned(),
            first_name: "Admin".to_owned(),
            last_name: "System".to_owned(),
            group_name: GroupName::new(ADMIN_GROUP),
            email: PRIMARY_ADMIN_USERNAME.to_owned(),
            is_coordinator: false,
            is_admin: true,
            is_user_admin: false,
        });
        tracing::info!("created primary admin account {}", admin.username);
    } else {
        tracing::info!("primary admin account already present");
    }

    if store.user_by_username(USER_ADMIN_USERNAME).is_none() {
        let user_admin = store.create_user(NewUser {
            username: USER_ADMIN_USERNAME.to_owned(),
            password: user_admin_password_hash.to_owned(),
            first_name: "Accounts".to_owned(),
            last_name: "Manager".to_owned(),
            group_name: GroupName::new(ADMIN_GROUP),
            email: USER_ADMIN_USERNAME.to_owned(),
            is_coordinator: false,
            is_admin: false,
            is_user_admin: true,
        });
        tracing::info!("created account-management admin {}", user_admin.username);
    } else {
        tracing::info!("account-management admin already present");
    }

    if store.products().is_empty() {
        let catalog = starter_catalog();
        let count = catalog.len();
        for product in catalog {
            store.create_product(product);
        }
        tracing::info!("seeded starter catalog with {count} products");
    }
}

fn starter_catalog() -> Vec<NewProduct> {
    let product = |name: &str, description: &str, cents: i64, category: &str| NewProduct {
        name: name.to_owned(),
        description: description.to_owned(),
        price: Decimal::new(cents, 2),
        category: category.to_owned(),
        available: Some(true),
    };

    vec![
        product(
            "Tuna and tomato sandwich",
            "Soft sandwich with tuna and tomato",
            250,
            "Food",
        ),
        product(
            "Ham and cheese sandwich",
            "Soft sandwich with baked ham and cheese",
            250,
            "Food",
        ),
        product(
            "Turkey roll",
            "Round roll with roast turkey breast, rocket and olive oil",
            280,
            "Food",
        ),
        product("Baked calzone", "Calzone with ham and mozzarella", 200, "Food"),
        product("Margherita pizza slice", "Tomato and mozzarella", 150, "Food"),
        product("White pizza slice", "Plain pizza with olive oil and salt", 100, "Food"),
        product("Sparkling water 50cl", "Chilled bottle", 100, "Beverages"),
        product("Orange juice", "200ml carton", 150, "Beverages"),
        product("Potato chips", "Single-serving bag", 120, "Snacks"),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_creates_admins_and_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path().join("app-data.json"));

        seed_store(&mut store, "hash-a", "hash-b");

        let admin = store.user_by_username(PRIMARY_ADMIN_USERNAME).unwrap();
        assert!(admin.is_admin);
        assert!(!admin.is_user_admin);
        assert!(admin.group_name.is_admin());

        let user_admin = store.user_by_username(USER_ADMIN_USERNAME).unwrap();
        assert!(user_admin.is_user_admin);
        assert!(!user_admin.is_admin);

        assert!(!store.products().is_empty());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(dir.path().join("app-data.json"));

        seed_store(&mut store, "hash-a", "hash-b");
        let users_after_first = store.users().len();
        let products_after_first = store.products().len();

        seed_store(&mut store, "hash-a", "hash-b");
        assert_eq!(store.users().len(), users_after_first);
        assert_eq!(store.products().len(), products_after_first);
    }
}
