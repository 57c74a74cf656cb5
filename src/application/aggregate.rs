//! Period aggregator: calculated days rolled up per week, month, quarter or year.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::domain::{percent_of, ratio, total, CalculatedDay, Period, PeriodSummary};

/// Summarize `days` per `period`, most recent period first.
///
/// Input order does not matter; each group is sorted by date before its
/// start and end capital are read.
#[must_use]
pub fn summarize_periods(days: &[CalculatedDay], period: Period) -> Vec<PeriodSummary> {
    let mut groups: HashMap<&str, Vec<&CalculatedDay>> = HashMap::new();
    for day in days {
        groups.entry(day.period_id(period)).or_default().push(day);
    }

    let mut summaries: Vec<PeriodSummary> = groups
        .into_iter()
        .map(|(id, mut group)| {
            group.sort_by_key(|day| day.date);
            summarize_group(id, &group)
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.first_date
            .cmp(&a.first_date)
            .then_with(|| b.period_id.cmp(&a.period_id))
    });
    summaries
}

/// Roll up one non-empty, date-sorted group.
fn summarize_group(period_id: &str, group: &[&CalculatedDay]) -> PeriodSummary {
    let first = group[0];
    let last = group[group.len() - 1];

    let pl_dollar = total(group.iter().map(|day| day.pl_daily_dollar));
    let winning = group
        .iter()
        .filter(|day| day.pl_daily_dollar > Decimal::ZERO)
        .count();

    PeriodSummary {
        period_id: period_id.to_string(),
        label: period_id.to_string(),
        pl_dollar,
        pl_percent: percent_of(pl_dollar, first.initial_capital_daily),
        win_rate: ratio(winning as u64, group.len()) * Decimal::ONE_HUNDRED,
        day_count: group.len(),
        total_operations: group.iter().map(|day| u64::from(day.trade_count)).sum(),
        total_deposits: total(group.iter().map(|day| day.deposit)),
        total_withdrawals: total(group.iter().map(|day| day.withdrawal)),
        start_capital: first.initial_capital_daily,
        end_capital: last.final_capital,
        first_date: first.date,
        last_date: last.date,
    }
}
