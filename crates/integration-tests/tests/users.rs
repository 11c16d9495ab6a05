//! Integration tests for user operations: ID recycling, cascading deletes,
//! and shallow-merge updates.

#![allow(clippy::unwrap_used)]

use canteen_core::{UserId, UserPatch};
use canteen_integration_tests::fixtures::{item, member, open_temp_store, order, product};

// ============================================================================
// ID Allocation & Recycling
// ============================================================================

#[test]
fn test_deleted_user_id_is_reused() {
    let (_dir, mut store) = open_temp_store();

    let a = store.create_user(member("a", "Team 1"));
    assert_eq!(a.id, UserId::new(1));

    assert!(store.delete_user(a.id));

    let b = store.create_user(member("b", "Team 1"));
    assert_eq!(b.id, UserId::new(1));
}

#[test]
fn test_smallest_freed_id_wins() {
    let (_dir, mut store) = open_temp_store();

    let a = store.create_user(member("a", "Team 1"));
    let b = store.create_user(member("b", "Team 1"));
    let c = store.create_user(member("c", "Team 1"));
    assert_eq!(
        (a.id, b.id, c.id),
        (UserId::new(1), UserId::new(2), UserId::new(3))
    );

    store.delete_user(c.id);
    store.delete_user(a.id);

    // Both 1 and 3 are free; the smallest is handed out first.
    let d = store.create_user(member("d", "Team 1"));
    assert_eq!(d.id, UserId::new(1));

    let e = store.create_user(member("e", "Team 1"));
    assert_eq!(e.id, UserId::new(3));

    // Free-list exhausted: back to max + 1.
    let f = store.create_user(member("f", "Team 1"));
    assert_eq!(f.id, UserId::new(4));
}

#[test]
fn test_sequential_ids_without_deletions() {
    let (_dir, mut store) = open_temp_store();

    for expected in 1..=5 {
        let user = store.create_user(member(&format!("user{expected}"), "Team 1"));
        assert_eq!(user.id, UserId::new(expected));
    }
}

// ============================================================================
// Cascading Delete
// ============================================================================

#[test]
fn test_delete_user_cascades_to_orders_and_items() {
    let (_dir, mut store) = open_temp_store();

    let user = store.create_user(member("buyer", "Team 2"));
    let first_order = store.create_order(order(user.id, 500));
    let second_order = store.create_order(order(user.id, 700));

    let catalog_item = store.create_product(product("Sandwich", "Food", 250));
    for order_id in [first_order.id, second_order.id] {
        store.create_order_item(item(order_id, catalog_item.id, 1, 250));
        store.create_order_item(item(order_id, catalog_item.id, 2, 250));
    }
    assert_eq!(store.order_items(first_order.id).len(), 2);
    assert_eq!(store.order_items(second_order.id).len(), 2);

    assert!(store.delete_user(user.id));

    assert!(store.user(user.id).is_none());
    assert!(store.order(first_order.id).is_none());
    assert!(store.order(second_order.id).is_none());
    assert!(store.order_items(first_order.id).is_empty());
    assert!(store.order_items(second_order.id).is_empty());
}

#[test]
fn test_cascade_leaves_other_users_orders_alone() {
    let (_dir, mut store) = open_temp_store();

    let leaver = store.create_user(member("leaver", "Team 2"));
    let stayer = store.create_user(member("stayer", "Team 2"));
    store.create_order(order(leaver.id, 300));
    let surviving = store.create_order(order(stayer.id, 400));

    store.delete_user(leaver.id);

    assert_eq!(store.orders().len(), 1);
    assert!(store.order(surviving.id).is_some());
    assert_eq!(store.orders_by_user(stayer.id).len(), 1);
}

#[test]
fn test_delete_unknown_user_returns_false() {
    let (_dir, mut store) = open_temp_store();
    assert!(!store.delete_user(UserId::new(99)));
}

// ============================================================================
// Lookups & Updates
// ============================================================================

#[test]
fn test_user_by_username_is_exact() {
    let (_dir, mut store) = open_temp_store();
    store.create_user(member("mrossi", "Team 1"));

    assert!(store.user_by_username("mrossi").is_some());
    assert!(store.user_by_username("MROSSI").is_none());
    assert!(store.user_by_username("mross").is_none());
}

#[test]
fn test_update_user_shallow_merge() {
    let (_dir, mut store) = open_temp_store();
    let user = store.create_user(member("mrossi", "Team 1"));

    let updated = store
        .update_user(
            user.id,
            UserPatch {
                email: Some("changed@example.com".to_owned()),
                last_name: Some(String::new()),
                ..UserPatch::default()
            },
        )
        .unwrap();

    // Explicit fields overwritten, even with an empty string.
    assert_eq!(updated.email, "changed@example.com");
    assert_eq!(updated.last_name, "");
    // Omitted fields retained.
    assert_eq!(updated.username, "mrossi");
    assert_eq!(updated.first_name, "Test");
}

#[test]
fn test_update_unknown_user_is_none() {
    let (_dir, mut store) = open_temp_store();
    assert!(store.update_user(UserId::new(42), UserPatch::default()).is_none());
}

#[test]
fn test_create_user_honors_caller_flags_only() {
    let (_dir, mut store) = open_temp_store();

    let mut admin = member("boss", "Admin");
    admin.is_admin = true;
    let created = store.create_user(admin);
    assert!(created.is_admin);

    // A plain member gets no elevation, whatever the username looks like.
    let plain = store.create_user(member("admin@canteen.local.lookalike", "Team 1"));
    assert!(!plain.is_admin);
    assert!(!plain.is_user_admin);
}
