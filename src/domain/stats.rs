//! Portfolio-level statistics snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use super::money::{Amount, Percent};

/// Win/loss averages and extremes for one granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WinLossAverages {
    pub avg_win_dollar: Amount,
    pub avg_win_percent: Percent,
    pub avg_loss_dollar: Amount,
    pub avg_loss_percent: Percent,
}

/// One snapshot of the whole journal. Zero everywhere for an empty journal.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub current_capital: Amount,
    /// Net invested capital as of the latest day (baseline plus flows),
    /// not the static configured baseline.
    pub total_initial_capital: Amount,
    pub total_pl_dollar: Amount,
    pub total_pl_percent: Percent,

    pub total_deposits: Amount,
    pub total_withdrawals: Amount,
    pub net_cash_flow: Amount,

    pub start_date: Option<NaiveDate>,
    pub duration_weeks: f64,
    pub duration_months: f64,
    pub duration_years: f64,

    pub max_consecutive_wins: usize,
    pub max_consecutive_losses: usize,

    pub winning_days: usize,
    pub losing_days: usize,
    pub win_rate: Percent,

    pub total_trades: u64,
    pub avg_trades_per_day: Amount,
    pub avg_trades_per_week: Amount,
    pub avg_trades_per_month: Amount,
    pub max_trades_per_day: u32,

    pub daily: WinLossAverages,
    pub weekly: WinLossAverages,
    pub monthly: WinLossAverages,

    pub max_win_daily_dollar: Amount,
    pub max_win_daily_percent: Percent,
    pub max_loss_daily_dollar: Amount,
    pub max_loss_daily_percent: Percent,

    /// Mean daily P/L over every day regardless of sign (expectancy).
    pub avg_general_dollar: Amount,
    pub avg_general_percent: Percent,
}
