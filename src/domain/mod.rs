//! Journal domain types: entries, capital configuration and derived records.
//!
//! Nothing in here performs I/O. Entries and the capital configuration are
//! the durable, user-owned state; calculated days, period summaries and
//! global statistics are pure derivations rebuilt by the application layer.

mod capital;
mod day;
mod entry;
mod id;
mod money;
mod stats;
mod summary;

pub mod error;
pub mod period;

pub use capital::{CapitalConfig, DEFAULT_INITIAL_CAPITAL};
pub use day::CalculatedDay;
pub use entry::{EntryFields, RawEntry, TradeEntry};
pub use error::DomainError;
pub use id::EntryId;
pub use money::{mean, percent_of, ratio, total, Amount, Percent};
pub use period::{Period, PeriodIds};
pub use stats::{GlobalStats, WinLossAverages};
pub use summary::PeriodSummary;
