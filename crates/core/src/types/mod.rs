//! Core types for Canteen.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod group;
pub mod id;
pub mod status;

pub use group::{ADMIN_GROUP, GroupName, MAX_GROUP_LEVEL};
pub use id::*;
pub use status::OrderStatus;
