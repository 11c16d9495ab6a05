//! End-of-period promotion command.

use super::open_store;

/// Run the promotion batch and report the outcome.
pub fn run() {
    let mut store = open_store();
    let outcome = store.promote_members();

    tracing::info!(
        "promotion complete: {} promoted, {} graduated out",
        outcome.promoted,
        outcome.deleted
    );
    for transition in &outcome.transitions {
        tracing::info!("  {} -> {}", transition.from, transition.to);
    }
}
