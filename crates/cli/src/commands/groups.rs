//! Group registry commands.

use super::open_store;

/// Show the groups available for registration.
#[allow(clippy::print_stdout)]
pub fn list() {
    let store = open_store();
    for group in store.available_groups() {
        println!("{group}");
    }
}

/// Replace the registry wholesale.
///
/// No check is made that removed names are unused by existing users; run
/// `canteen users list` first if that matters.
pub fn set(names: Vec<String>) {
    let mut store = open_store();
    let groups = store.update_available_groups(names);
    tracing::info!("group registry now holds {} groups", groups.len());
}
