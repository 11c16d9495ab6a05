//! Canteen Core - Shared types library.
//!
//! This crate provides common types used across all Canteen components:
//! - `store` - Persistent entity store, group registry, and promotion engine
//! - `cli` - Command-line tools for seeding and group management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access. This keeps it
//! lightweight and allows it to be used anywhere, including by the routing and
//! UI layers that consume the store.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, group names, and statuses
//! - [`models`] - Entity records (`User`, `Product`, `Order`, `OrderItem`) and
//!   their insert/patch companion types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
