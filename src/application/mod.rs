//! Application services (use cases).
//!
//! The derivation pipeline runs in full on every read: [`derivation`] turns
//! entries into calculated days, [`aggregate`] rolls them up per period and
//! [`statistics`] condenses everything into one snapshot. [`journal`] owns
//! the mutable state; the remaining modules are read-side views over a
//! [`snapshot::Snapshot`].

pub mod aggregate;
pub mod calendar;
pub mod derivation;
pub mod funds;
pub mod journal;
pub mod notes;
pub mod snapshot;
pub mod statistics;

pub use journal::{AddOutcome, ImportSummary, Journal, PendingChange, UpdateOutcome};
pub use snapshot::{Dashboard, Snapshot};
