//! Tradebook - a personal trading-capital journal.
//!
//! One entry per trading day records the closing account capital, cash
//! deposited or withdrawn and a few notes. Everything else is derived from
//! that list: daily, week-to-date, month-to-date and total P/L, period
//! summaries and journal-wide statistics.
//!
//! # Architecture
//!
//! - **`domain`** - Entries, capital configuration and the derived records
//! - **`application`** - The derivation pipeline, the entry store
//!   ([`application::Journal`]) and the read-side views
//! - **`port`** - Storage and id-generation traits
//! - **`adapter`** - SQLite storage, file formats and the CLI
//! - **`infrastructure`** - Configuration and wiring
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use tradebook::application::snapshot::Snapshot;
//! use tradebook::domain::{CapitalConfig, EntryFields, EntryId, TradeEntry};
//!
//! let entries = [TradeEntry::new(
//!     EntryId::new("a"),
//!     NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//!     EntryFields::closing(dec!(1100)),
//! )];
//! let snapshot = Snapshot::build(&entries, &CapitalConfig::default());
//! assert_eq!(snapshot.days[0].pl_daily_dollar, dec!(100));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
