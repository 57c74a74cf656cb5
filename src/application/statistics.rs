//! Global statistics calculator.

use rust_decimal::Decimal;

use crate::domain::{
    mean, ratio, total, Amount, CalculatedDay, GlobalStats, Percent, PeriodSummary, WinLossAverages,
};

const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.44;
const DAYS_PER_YEAR: f64 = 365.25;

/// Compute the statistics snapshot.
///
/// `days` is the newest-first calculated series; `weekly` and `monthly` are
/// the summaries built from it. No days means all-zero statistics.
#[must_use]
pub fn global_stats(
    days: &[CalculatedDay],
    weekly: &[PeriodSummary],
    monthly: &[PeriodSummary],
) -> GlobalStats {
    let (Some(newest), Some(oldest)) = (days.first(), days.last()) else {
        return GlobalStats::default();
    };

    let total_deposits = total(days.iter().map(|day| day.deposit));
    let total_withdrawals = total(days.iter().map(|day| day.withdrawal));

    let calendar_days = (newest.date - oldest.date).num_days().abs() + 1;
    let calendar_days = calendar_days as f64;

    let streaks = Streaks::over(days.iter().rev());

    let total_trades: u64 = days.iter().map(|day| u64::from(day.trade_count)).sum();
    let max_trades_per_day = days.iter().map(|day| day.trade_count).max().unwrap_or(0);

    let (winners, losers): (Vec<&CalculatedDay>, Vec<&CalculatedDay>) = days
        .iter()
        .partition(|day| day.pl_daily_dollar > Decimal::ZERO);

    let daily_dollars: Vec<Amount> = days.iter().map(|day| day.pl_daily_dollar).collect();
    let daily_percents: Vec<Percent> = days.iter().map(|day| day.pl_daily_percent).collect();

    GlobalStats {
        current_capital: newest.final_capital,
        total_initial_capital: newest.initial_capital_total,
        total_pl_dollar: newest.pl_total_to_date_dollar,
        total_pl_percent: newest.pl_total_to_date_percent,

        total_deposits,
        total_withdrawals,
        net_cash_flow: total_deposits.saturating_sub(total_withdrawals),

        start_date: Some(oldest.date),
        duration_weeks: calendar_days / DAYS_PER_WEEK,
        duration_months: calendar_days / DAYS_PER_MONTH,
        duration_years: calendar_days / DAYS_PER_YEAR,

        max_consecutive_wins: streaks.max_wins,
        max_consecutive_losses: streaks.max_losses,

        winning_days: winners.len(),
        losing_days: losers.len(),
        win_rate: ratio(winners.len() as u64, days.len()) * Decimal::ONE_HUNDRED,

        total_trades,
        avg_trades_per_day: ratio(total_trades, days.len()),
        avg_trades_per_week: ratio(total_trades, weekly.len()),
        avg_trades_per_month: ratio(total_trades, monthly.len()),
        max_trades_per_day,

        daily: WinLossAverages {
            avg_win_dollar: mean_of(&winners, |day| day.pl_daily_dollar),
            avg_win_percent: mean_of(&winners, |day| day.pl_daily_percent),
            avg_loss_dollar: mean_of(&losers, |day| day.pl_daily_dollar),
            avg_loss_percent: mean_of(&losers, |day| day.pl_daily_percent),
        },
        weekly: summary_averages(weekly),
        monthly: summary_averages(monthly),

        max_win_daily_dollar: max_or_zero(&daily_dollars),
        max_win_daily_percent: max_or_zero(&daily_percents),
        max_loss_daily_dollar: min_or_zero(&daily_dollars),
        max_loss_daily_percent: min_or_zero(&daily_percents),

        avg_general_dollar: mean(&daily_dollars),
        avg_general_percent: mean(&daily_percents),
    }
}

/// Longest winning and losing runs of a chronological series.
///
/// A flat day ends both runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Streaks {
    pub max_wins: usize,
    pub max_losses: usize,
}

impl Streaks {
    /// Walk `days` in the order given, which must be oldest first.
    pub fn over<'a>(days: impl IntoIterator<Item = &'a CalculatedDay>) -> Self {
        let mut streaks = Self::default();
        let (mut wins, mut losses) = (0usize, 0usize);

        for day in days {
            if day.pl_daily_dollar > Decimal::ZERO {
                wins += 1;
                losses = 0;
                streaks.max_wins = streaks.max_wins.max(wins);
            } else if day.pl_daily_dollar < Decimal::ZERO {
                losses += 1;
                wins = 0;
                streaks.max_losses = streaks.max_losses.max(losses);
            } else {
                wins = 0;
                losses = 0;
            }
        }
        streaks
    }
}

/// Win/loss averages over period summaries; a flat period counts as a loss.
fn summary_averages(summaries: &[PeriodSummary]) -> WinLossAverages {
    let (winners, losers): (Vec<&PeriodSummary>, Vec<&PeriodSummary>) = summaries
        .iter()
        .partition(|summary| summary.pl_dollar > Decimal::ZERO);

    WinLossAverages {
        avg_win_dollar: mean_of(&winners, |s| s.pl_dollar),
        avg_win_percent: mean_of(&winners, |s| s.pl_percent),
        avg_loss_dollar: mean_of(&losers, |s| s.pl_dollar),
        avg_loss_percent: mean_of(&losers, |s| s.pl_percent),
    }
}

fn mean_of<T>(items: &[&T], field: impl Fn(&T) -> Decimal) -> Decimal {
    let values: Vec<Decimal> = items.iter().map(|item| field(*item)).collect();
    mean(&values)
}

fn max_or_zero(values: &[Decimal]) -> Decimal {
    values.iter().copied().max().unwrap_or_default()
}

fn min_or_zero(values: &[Decimal]) -> Decimal {
    values.iter().copied().min().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::aggregate::summarize_periods;
    use crate::application::derivation::derive_days;
    use crate::domain::{CapitalConfig, EntryFields, EntryId, Period, TradeEntry};
    use chrono::{Duration, NaiveDate};
    use rust_decimal_macros::dec;

    fn series(closes: &[Decimal]) -> Vec<CalculatedDay> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let entries: Vec<TradeEntry> = closes
            .iter()
            .enumerate()
            .map(|(i, close)| {
                TradeEntry::new(
                    EntryId::new(format!("e{i}")),
                    start + Duration::days(i as i64),
                    EntryFields::closing(*close).with_trades(2),
                )
            })
            .collect();
        derive_days(&entries, &CapitalConfig::default())
    }

    fn stats_for(days: &[CalculatedDay]) -> GlobalStats {
        let weekly = summarize_periods(days, Period::Week);
        let monthly = summarize_periods(days, Period::Month);
        global_stats(days, &weekly, &monthly)
    }

    #[test]
    fn no_days_yield_zeroed_stats() {
        let stats = global_stats(&[], &[], &[]);

        assert_eq!(stats, GlobalStats::default());
        assert_eq!(stats.win_rate, Decimal::ZERO);
        assert_eq!(stats.start_date, None);
        assert_eq!(stats.duration_weeks, 0.0);
    }

    #[test]
    fn all_winning_days_form_one_streak() {
        let days = series(&[dec!(1010), dec!(1020), dec!(1030), dec!(1040)]);

        let stats = stats_for(&days);

        assert_eq!(stats.max_consecutive_wins, 4);
        assert_eq!(stats.max_consecutive_losses, 0);
        assert_eq!(stats.win_rate, dec!(100));
    }

    #[test]
    fn flat_day_breaks_both_streaks() {
        // +10, +10, 0, +10, -10, -10, 0, -10
        let days = series(&[
            dec!(1010),
            dec!(1020),
            dec!(1020),
            dec!(1030),
            dec!(1020),
            dec!(1010),
            dec!(1010),
            dec!(1000),
        ]);

        let streaks = Streaks::over(days.iter().rev());

        assert_eq!(streaks.max_wins, 2);
        assert_eq!(streaks.max_losses, 2);
    }

    #[test]
    fn flat_days_count_as_losses_in_win_rate() {
        let days = series(&[dec!(1100), dec!(1100), dec!(1050), dec!(1155)]);

        let stats = stats_for(&days);

        assert_eq!(stats.winning_days, 2);
        assert_eq!(stats.losing_days, 2);
        assert_eq!(stats.win_rate, dec!(50));
        // Flat day is part of the loss average.
        assert_eq!(stats.daily.avg_loss_dollar, dec!(-25));
    }

    #[test]
    fn headline_figures_come_from_newest_day() {
        let days = series(&[dec!(1100), dec!(1210)]);

        let stats = stats_for(&days);

        assert_eq!(stats.current_capital, dec!(1210));
        assert_eq!(stats.total_initial_capital, dec!(1000));
        assert_eq!(stats.total_pl_dollar, dec!(210));
        assert_eq!(stats.total_pl_percent, dec!(21));
        assert_eq!(stats.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn trade_volume_and_duration() {
        let days = series(&[dec!(1000); 14]);

        let stats = stats_for(&days);

        assert_eq!(stats.total_trades, 28);
        assert_eq!(stats.max_trades_per_day, 2);
        assert_eq!(stats.avg_trades_per_day, dec!(2));
        // 2024-01-01..=2024-01-14 spans two ISO weeks.
        assert_eq!(stats.avg_trades_per_week, dec!(14));
        assert_eq!(stats.avg_trades_per_month, dec!(28));
        assert!((stats.duration_weeks - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn extremes_and_expectancy() {
        let days = series(&[dec!(1100), dec!(1045), dec!(1065)]);

        let stats = stats_for(&days);

        assert_eq!(stats.max_win_daily_dollar, dec!(100));
        assert_eq!(stats.max_loss_daily_dollar, dec!(-55));
        assert_eq!(stats.max_win_daily_percent, dec!(10));
        assert_eq!(stats.max_loss_daily_percent, dec!(-5));
        assert_eq!(stats.avg_general_dollar, dec!(65) / dec!(3));
    }

    #[test]
    fn cash_flow_totals() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let entries = [
            TradeEntry::new(
                EntryId::new("a"),
                start,
                EntryFields::closing(dec!(1300)).with_deposit(dec!(300)),
            ),
            TradeEntry::new(
                EntryId::new("b"),
                start + Duration::days(1),
                EntryFields::closing(dec!(1200)).with_withdrawal(dec!(100)),
            ),
        ];
        let days = derive_days(&entries, &CapitalConfig::default());

        let stats = stats_for(&days);

        assert_eq!(stats.total_deposits, dec!(300));
        assert_eq!(stats.total_withdrawals, dec!(100));
        assert_eq!(stats.net_cash_flow, dec!(200));
        assert_eq!(stats.total_initial_capital, dec!(1200));
    }
}
