//! CLI command implementations.

pub mod groups;
pub mod promote;
pub mod seed;
pub mod users;

use canteen_store::{Store, StoreConfig};

/// Open the store configured by the environment.
pub fn open_store() -> Store {
    let config = StoreConfig::from_env();
    Store::open(config.data_file())
}
