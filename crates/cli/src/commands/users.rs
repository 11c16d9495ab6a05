//! User inspection commands.

use super::open_store;

/// List registered users sorted by id.
///
/// The store returns users in unspecified order; sorting is the caller's
/// job, so it happens here.
#[allow(clippy::print_stdout)]
pub fn list() {
    let store = open_store();
    let mut users = store.users();
    users.sort_by_key(|user| user.id);

    for user in users {
        println!(
            "{:>4}  {:<32}  {:<20}  {}{}{}",
            user.id,
            user.username,
            user.group_name,
            if user.is_admin { "admin " } else { "" },
            if user.is_user_admin { "user-admin " } else { "" },
            if user.is_coordinator { "coordinator" } else { "" },
        );
    }
}
