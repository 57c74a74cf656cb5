//! Period summaries produced by the aggregator.

use chrono::NaiveDate;
use serde::Serialize;

use super::money::{Amount, Percent};

/// Rollup of the calculated days sharing one period identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub period_id: String,
    pub label: String,
    pub pl_dollar: Amount,
    pub pl_percent: Percent,
    /// Share of days with a positive P/L, in percent.
    pub win_rate: Percent,
    /// Number of recorded days in the period.
    pub day_count: usize,
    /// Trades executed across the period.
    pub total_operations: u64,
    pub total_deposits: Amount,
    pub total_withdrawals: Amount,
    pub start_capital: Amount,
    pub end_capital: Amount,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

impl PeriodSummary {
    /// Net external cash flow over the period.
    #[must_use]
    pub fn net_cash_flow(&self) -> Amount {
        self.total_deposits.saturating_sub(self.total_withdrawals)
    }

    /// Whether any deposit or withdrawal happened in the period.
    #[must_use]
    pub fn has_cash_flow(&self) -> bool {
        !self.total_deposits.is_zero() || !self.total_withdrawals.is_zero()
    }
}
