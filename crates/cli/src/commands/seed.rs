//! Store seeding command.
//!
//! # Usage
//!
//! ```bash
//! canteen seed --admin-password-hash <HASH> --user-admin-password-hash <HASH>
//! ```
//!
//! The hashes are opaque credential blobs produced by the authentication
//! layer's tooling; this command never hashes anything itself.

use canteen_store::seed::seed_store;

use super::open_store;

/// Seed the bootstrap admin accounts and the starter catalog.
pub fn run(admin_password_hash: &str, user_admin_password_hash: &str) {
    let mut store = open_store();
    seed_store(&mut store, admin_password_hash, user_admin_password_hash);
    tracing::info!("seeding complete");
}
