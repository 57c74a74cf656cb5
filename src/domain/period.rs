//! Period identifiers derived from an entry's calendar date.
//!
//! Weeks, months, quarters and years are keyed by strings so summaries can
//! be grouped with a plain map. Boundaries depend on the date alone.

use chrono::{Datelike, Duration, NaiveDate};

/// Rollup granularity for period summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    /// All granularities, finest first.
    pub const ALL: [Period; 4] = [Period::Week, Period::Month, Period::Quarter, Period::Year];

    /// Human-readable name of the granularity.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Quarter => "quarter",
            Period::Year => "year",
        }
    }

    /// Select this granularity's identifier.
    #[must_use]
    pub fn select(self, ids: &PeriodIds) -> &str {
        match self {
            Period::Week => &ids.week,
            Period::Month => &ids.month,
            Period::Quarter => &ids.quarter,
            Period::Year => &ids.year,
        }
    }
}

/// Every period identifier for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodIds {
    pub week: String,
    pub month: String,
    pub quarter: String,
    pub year: String,
}

impl PeriodIds {
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            week: week_label(date),
            month: month_key(date),
            quarter: quarter_key(date),
            year: format!("{:04}", date.year()),
        }
    }
}

/// Monday of the ISO week containing `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = i64::from(date.weekday().num_days_from_monday());
    date - Duration::days(offset)
}

/// Monday–Friday label of the ISO week containing `date`.
///
/// The Friday carries its year so weeks from different years never share a
/// label: `Week 01/01 - 05/01/2024`.
#[must_use]
pub fn week_label(date: NaiveDate) -> String {
    let monday = week_start(date);
    let friday = monday + Duration::days(4);
    format!(
        "Week {} - {}",
        monday.format("%d/%m"),
        friday.format("%d/%m/%Y")
    )
}

/// `YYYY-MM` key of the month containing `date`.
#[must_use]
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// `YYYY-Qn` key of the quarter containing `date`.
#[must_use]
pub fn quarter_key(date: NaiveDate) -> String {
    format!("{:04}-Q{}", date.year(), (date.month() + 2) / 3)
}

/// First day of a `YYYY-MM` month key, or `None` if the key is malformed.
#[must_use]
pub fn parse_month_key(key: &str) -> Option<NaiveDate> {
    let key = key.trim();
    if key.len() != 7 || key.as_bytes()[4] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d").ok()
}
