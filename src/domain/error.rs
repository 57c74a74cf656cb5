//! Domain errors raised while normalizing loosely-shaped records.
//!
//! Persisted and imported entries come from older formats where most fields
//! were optional. Normalization turns them into strict [`TradeEntry`] values
//! and reports the records it has to drop.
//!
//! [`TradeEntry`]: super::TradeEntry

use thiserror::Error;

/// A loose record that cannot become a journal entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Every entry is keyed by its calendar date.
    #[error("entry has no date")]
    MissingDate,

    /// Dates must be ISO `YYYY-MM-DD`.
    #[error("entry date '{value}' is not a valid YYYY-MM-DD date")]
    InvalidDate {
        /// The rejected date text.
        value: String,
    },

    /// The closing balance is the one required figure of a day.
    #[error("entry for {date} has no final capital")]
    MissingFinalCapital {
        /// Date of the incomplete entry.
        date: String,
    },
}
