//! # Seglock Core
//!
//! Arbitrates Read/Write locks that management-console sessions take on
//! shared hardware resources. A resource is addressed as an ordered list of
//! byte-granularity segments, each carrying a matching rule; the manager
//! grants a batch of lock requests atomically under one transaction id, and
//! only the owning (session, console) pair may release it.
//!
//! ## Flow
//!
//! ```text
//! acquire: LockRecord* ─► RequestValidator ─► self_conflicts ─► table scan ─► TransactionId
//! release: TransactionId* ─► all held? ─► all owned? ─► remove
//! ```
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` / `expect()` / `panic!()` outside tests
//! - No `unsafe`
//!
//! ## Error Handling
//!
//! Lock rejections are values: [`AcquireError`] and [`ReleaseError`]. No
//! rejection mutates the table. [`Error`] covers configuration failures.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod config;
pub mod conflict;
mod error;
pub mod identifiers;
pub mod manager;
pub mod ownership;
pub mod rejection;
pub mod request;
pub mod service;
pub mod table;
pub mod validate;

pub use allocator::TransactionIdAllocator;
pub use config::{load_config, Config, LockLimits};
pub use conflict::{conflicts, self_conflicts};
pub use error::{Error, Result};
pub use identifiers::{Identity, TransactionId};
pub use manager::LockManager;
pub use rejection::{AcquireError, ReleaseError};
pub use request::{LockFlag, LockRecord, LockRequest, LockType, Segment, SegmentRecord};
pub use service::LockService;
pub use table::LockTable;
pub use validate::{RequestValidator, ValidationError};
