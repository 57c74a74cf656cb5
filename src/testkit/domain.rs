//! Builders for journal entries used across tests.

use chrono::NaiveDate;

use crate::domain::{Amount, EntryFields, EntryId, TradeEntry};

/// Parse a `YYYY-MM-DD` date, panicking on bad input.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|_| panic!("bad test date {s}"))
}

/// An entry with only a closing balance.
pub fn entry(id: &str, day: &str, final_capital: Amount) -> TradeEntry {
    entry_with(id, day, EntryFields::closing(final_capital))
}

/// An entry with arbitrary fields.
pub fn entry_with(id: &str, day: &str, fields: EntryFields) -> TradeEntry {
    TradeEntry::new(EntryId::new(id), date(day), fields)
}
