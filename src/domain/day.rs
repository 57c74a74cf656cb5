//! Calculated days: one derived record per entry, rebuilt on every run.

use chrono::NaiveDate;
use serde::Serialize;

use super::id::EntryId;
use super::money::{Amount, Percent};
use super::period::{Period, PeriodIds};

/// An entry together with everything derived for its date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedDay {
    pub id: EntryId,
    pub date: NaiveDate,
    pub final_capital: Amount,
    /// Resolved start-of-day capital (override, or previous close plus net flow).
    pub initial_capital_daily: Amount,
    pub deposit: Amount,
    pub withdrawal: Amount,
    pub trade_count: u32,
    pub notes: String,

    pub pl_daily_dollar: Amount,
    pub pl_daily_percent: Percent,

    pub pl_week_to_date_dollar: Amount,
    pub pl_week_to_date_percent: Percent,

    /// Start capital of the day's month.
    pub initial_capital_monthly: Amount,
    pub pl_month_to_date_dollar: Amount,
    pub pl_month_to_date_percent: Percent,

    /// Net invested capital (baseline plus all flows) as of this day.
    pub initial_capital_total: Amount,
    pub pl_total_to_date_dollar: Amount,
    pub pl_total_to_date_percent: Percent,

    pub week_id: String,
    pub month_id: String,
    pub quarter_id: String,
    pub year_id: String,
}

impl CalculatedDay {
    /// Identifier of the period this day falls in.
    #[must_use]
    pub fn period_id(&self, period: Period) -> &str {
        match period {
            Period::Week => &self.week_id,
            Period::Month => &self.month_id,
            Period::Quarter => &self.quarter_id,
            Period::Year => &self.year_id,
        }
    }

    /// All period identifiers of this day.
    #[must_use]
    pub fn period_ids(&self) -> PeriodIds {
        PeriodIds {
            week: self.week_id.clone(),
            month: self.month_id.clone(),
            quarter: self.quarter_id.clone(),
            year: self.year_id.clone(),
        }
    }

    /// Whether the day has journal notes worth showing.
    #[must_use]
    pub fn has_notes(&self) -> bool {
        !self.notes.trim().is_empty()
    }
}
