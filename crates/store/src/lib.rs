//! Canteen Store - the persistent data store behind the ordering system.
//!
//! This crate owns the four entity maps (users, products, orders, order
//! items), ID allocation including the recycling free-list for users,
//! cascading deletes, group-scoped queries, the group registry, and the
//! group-promotion batch algorithm.
//!
//! # Architecture
//!
//! A [`Store`] is an explicit object constructed once at process start via
//! [`Store::open`] and passed by reference to consumers - there is no
//! singleton. In-memory maps are the source of truth for the process
//! lifetime; every mutating operation flushes a full snapshot to a single
//! JSON document on disk. Persistence is best-effort: a failed write is
//! logged and the store keeps serving from memory (availability over
//! durability).
//!
//! # Known limitations
//!
//! - A crash mid-write can corrupt the data file; there is no partial-write
//!   recovery. The store then starts empty on the next open.
//! - Every mutation rewrites the whole file; no write coalescing. The
//!   working set is small enough that this is a non-issue.
//! - Single process, sequential access. Nothing guards against a second
//!   writer on the same file.
//!
//! # Modules
//!
//! - [`persist`] - durable key-value JSON document access
//! - [`snapshot`] - on-disk layout of the entity snapshot
//! - [`store`] - the entity store itself
//! - [`groups`] - group registry operations
//! - [`promotion`] - the group-promotion batch algorithm
//! - [`seed`] - explicit bootstrap step (admin accounts, starter catalog)
//! - [`config`] - environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod groups;
pub mod persist;
pub mod promotion;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use config::StoreConfig;
pub use groups::DEFAULT_GROUPS;
pub use persist::{DataFile, PersistError};
pub use promotion::{GroupTransition, PromotionOutcome};
pub use snapshot::Snapshot;
pub use store::Store;
