//! Notes journal: days with written notes, filtered and sorted.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::domain::{Amount, CalculatedDay};

/// Which trading results to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    #[default]
    All,
    /// Days that did not lose money.
    Winners,
    Losers,
}

impl Outcome {
    fn admits(self, day: &CalculatedDay) -> bool {
        let won = is_winner(day);
        match self {
            Self::All => true,
            Self::Winners => won,
            Self::Losers => !won,
        }
    }
}

/// A flat day counts as a winner in the notes journal.
#[must_use]
pub fn is_winner(day: &CalculatedDay) -> bool {
    day.pl_daily_dollar >= Amount::ZERO
}

/// Filter over the notes journal. The default admits every day with notes,
/// newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesFilter {
    /// Case-insensitive match against the notes or the `YYYY-MM-DD` date.
    pub search: Option<String>,
    pub outcome: Outcome,
    pub weekday: Option<Weekday>,
    /// Inclusive bounds.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub oldest_first: bool,
}

impl NotesFilter {
    fn admits(&self, day: &CalculatedDay) -> bool {
        if !day.has_notes() || !self.outcome.admits(day) {
            return false;
        }
        if self.weekday.is_some_and(|weekday| day.date.weekday() != weekday) {
            return false;
        }
        if self.from.is_some_and(|from| day.date < from) || self.to.is_some_and(|to| day.date > to) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                day.notes.to_lowercase().contains(&term)
                    || day.date.format("%Y-%m-%d").to_string().contains(&term)
            }
            _ => true,
        }
    }

    /// Whether any criterion narrows the journal.
    #[must_use]
    pub fn is_active(&self) -> bool {
        let search = self.search.as_deref().is_some_and(|term| !term.trim().is_empty());
        search
            || self.outcome != Outcome::All
            || self.weekday.is_some()
            || self.from.is_some()
            || self.to.is_some()
    }
}

/// Days with notes matching `filter`, in the requested order.
#[must_use]
pub fn journal_notes<'a>(days: &'a [CalculatedDay], filter: &NotesFilter) -> Vec<&'a CalculatedDay> {
    let mut notes: Vec<&CalculatedDay> = days.iter().filter(|day| filter.admits(day)).collect();
    if filter.oldest_first {
        notes.sort_by_key(|day| day.date);
    } else {
        notes.sort_by(|a, b| b.date.cmp(&a.date));
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::derivation::derive_days;
    use crate::domain::{CapitalConfig, EntryFields, EntryId, TradeEntry};
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn days() -> Vec<CalculatedDay> {
        let entries = [
            // Tuesday, +100
            TradeEntry::new(
                EntryId::new("a"),
                date("2024-01-02"),
                EntryFields::closing(dec!(1100)).with_notes("Breakout on ES, held too long"),
            ),
            // Wednesday, -50
            TradeEntry::new(
                EntryId::new("b"),
                date("2024-01-03"),
                EntryFields::closing(dec!(1050)).with_notes("Revenge trade after FOMC"),
            ),
            // Thursday, flat, no notes
            TradeEntry::new(EntryId::new("c"), date("2024-01-04"), EntryFields::closing(dec!(1050))),
            // Friday, flat
            TradeEntry::new(
                EntryId::new("d"),
                date("2024-01-05"),
                EntryFields::closing(dec!(1050)).with_notes("   "),
            ),
            // Tuesday, flat
            TradeEntry::new(
                EntryId::new("e"),
                date("2024-01-09"),
                EntryFields::closing(dec!(1050)).with_notes("Sat out, choppy open"),
            ),
        ];
        derive_days(&entries, &CapitalConfig::default())
    }

    fn dates(notes: &[&CalculatedDay]) -> Vec<String> {
        notes.iter().map(|day| day.date.to_string()).collect()
    }

    #[test]
    fn default_filter_lists_noted_days_newest_first() {
        let days = days();

        let notes = journal_notes(&days, &NotesFilter::default());

        assert_eq!(dates(&notes), ["2024-01-09", "2024-01-03", "2024-01-02"]);
    }

    #[test]
    fn flat_days_are_winners() {
        let days = days();
        let filter = NotesFilter {
            outcome: Outcome::Winners,
            oldest_first: true,
            ..NotesFilter::default()
        };

        assert_eq!(dates(&journal_notes(&days, &filter)), ["2024-01-02", "2024-01-09"]);

        let losers = NotesFilter {
            outcome: Outcome::Losers,
            ..NotesFilter::default()
        };
        assert_eq!(dates(&journal_notes(&days, &losers)), ["2024-01-03"]);
    }

    #[test]
    fn search_matches_notes_and_dates_case_insensitively() {
        let days = days();
        let by_text = NotesFilter {
            search: Some("fomc".into()),
            ..NotesFilter::default()
        };
        let by_date = NotesFilter {
            search: Some("01-09".into()),
            ..NotesFilter::default()
        };

        assert_eq!(dates(&journal_notes(&days, &by_text)), ["2024-01-03"]);
        assert_eq!(dates(&journal_notes(&days, &by_date)), ["2024-01-09"]);
    }

    #[test]
    fn weekday_and_range_filters() {
        let days = days();
        let tuesdays = NotesFilter {
            weekday: Some(Weekday::Tue),
            ..NotesFilter::default()
        };
        let first_week = NotesFilter {
            from: Some(date("2024-01-03")),
            to: Some(date("2024-01-05")),
            ..NotesFilter::default()
        };

        assert_eq!(dates(&journal_notes(&days, &tuesdays)), ["2024-01-09", "2024-01-02"]);
        assert_eq!(dates(&journal_notes(&days, &first_week)), ["2024-01-03"]);
        assert!(first_week.is_active());
        assert!(!NotesFilter::default().is_active());
    }
}
