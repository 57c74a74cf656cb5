//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The journal core talks to the outside world through two seams: a
//! key/value blob store holding the entry list and the capital
//! configuration, and an id generator for new entries.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │  journal + derivation   │
//!                    └────────────┬────────────┘
//!                 ┌───────────────┴──────────────┐
//!                 ▼                              ▼
//!          ┌─────────────┐                ┌─────────────┐
//!          │  BlobStore  │                │ IdGenerator │
//!          │ (sqlite,    │                │ (uuid,      │
//!          │  memory)    │                │  sequence)  │
//!          └─────────────┘                └─────────────┘
//! ```

pub mod outbound;
