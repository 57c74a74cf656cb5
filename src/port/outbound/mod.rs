//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod id;
pub mod storage;

pub use id::IdGenerator;
pub use storage::BlobStore;
