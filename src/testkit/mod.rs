//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`store`]: in-memory [`BlobStore`](crate::port::outbound::BlobStore)
//!   and a deterministic [`IdGenerator`](crate::port::outbound::IdGenerator).
//! - [`domain`]: builders for entries and dates.

pub mod domain;
pub mod store;

pub use domain::{date, entry, entry_with};
pub use store::{MemoryBlobStore, SequentialIds};
