//! One full pipeline run and the dashboard read from it.

use serde::Serialize;

use crate::domain::{
    Amount, CalculatedDay, CapitalConfig, GlobalStats, Percent, Period, PeriodSummary, TradeEntry,
};

use super::aggregate::summarize_periods;
use super::derivation::derive_days;
use super::statistics::global_stats;

/// Everything derived from the journal at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Calculated days, newest first.
    pub days: Vec<CalculatedDay>,
    pub weekly: Vec<PeriodSummary>,
    pub monthly: Vec<PeriodSummary>,
    pub quarterly: Vec<PeriodSummary>,
    pub yearly: Vec<PeriodSummary>,
    pub stats: GlobalStats,
}

impl Snapshot {
    #[must_use]
    pub fn build(entries: &[TradeEntry], config: &CapitalConfig) -> Self {
        let days = derive_days(entries, config);
        let weekly = summarize_periods(&days, Period::Week);
        let monthly = summarize_periods(&days, Period::Month);
        let quarterly = summarize_periods(&days, Period::Quarter);
        let yearly = summarize_periods(&days, Period::Year);
        let stats = global_stats(&days, &weekly, &monthly);

        Self {
            days,
            weekly,
            monthly,
            quarterly,
            yearly,
            stats,
        }
    }

    /// Summaries for one granularity, most recent first.
    #[must_use]
    pub fn summaries(&self, period: Period) -> &[PeriodSummary] {
        match period {
            Period::Week => &self.weekly,
            Period::Month => &self.monthly,
            Period::Quarter => &self.quarterly,
            Period::Year => &self.yearly,
        }
    }

    #[must_use]
    pub fn latest(&self) -> Option<&CalculatedDay> {
        self.days.first()
    }

    /// Headline figures for the latest day, `None` for an empty journal.
    #[must_use]
    pub fn dashboard(&self) -> Option<Dashboard> {
        let latest = self.latest()?;
        let week = self
            .weekly
            .iter()
            .find(|summary| summary.period_id == latest.week_id)
            .cloned();

        Some(Dashboard {
            date: latest.date,
            current_capital: latest.final_capital,
            daily_pl_dollar: latest.pl_daily_dollar,
            daily_pl_percent: latest.pl_daily_percent,
            week,
            month_id: latest.month_id.clone(),
            month_start_capital: latest.initial_capital_monthly,
            month_pl_dollar: latest.pl_month_to_date_dollar,
            month_pl_percent: latest.pl_month_to_date_percent,
            net_invested: latest.initial_capital_total,
            total_pl_dollar: latest.pl_total_to_date_dollar,
            total_pl_percent: latest.pl_total_to_date_percent,
        })
    }
}

/// Latest-day cards: daily, current week, month-to-date and total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub date: chrono::NaiveDate,
    pub current_capital: Amount,
    pub daily_pl_dollar: Amount,
    pub daily_pl_percent: Percent,
    /// Summary of the week containing the latest day.
    pub week: Option<PeriodSummary>,
    pub month_id: String,
    pub month_start_capital: Amount,
    pub month_pl_dollar: Amount,
    pub month_pl_percent: Percent,
    pub net_invested: Amount,
    pub total_pl_dollar: Amount,
    pub total_pl_percent: Percent,
}
