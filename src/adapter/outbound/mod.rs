//! Outbound adapters (driven side).

pub mod export;
pub mod id;
pub mod sqlite;

pub use id::UuidIds;
pub use sqlite::SqliteBlobStore;
