//! Entity records shared between the store and its consumers.
//!
//! Each entity comes with companion types: a `New*` insert type (no id - the
//! store assigns one) and, where partial updates exist, a `*Patch` type whose
//! fields are all optional (`None` = keep the stored value, `Some` =
//! overwrite it, even with an empty string or `false`).
//!
//! All records serialize with camelCase field names to match the persisted
//! document layout.

pub mod order;
pub mod product;
pub mod user;

pub use order::{NewOrder, NewOrderItem, Order, OrderItem};
pub use product::{ALL_CATEGORIES, NewProduct, Product, ProductPatch};
pub use user::{NewUser, User, UserPatch};
