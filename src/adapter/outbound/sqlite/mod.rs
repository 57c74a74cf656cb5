//! SQLite persistence adapter.
//!
//! Stores the journal's JSON documents in a single key/value table using
//! Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteBlobStore;
