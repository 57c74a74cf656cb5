//! Derivation engine: entries and capital configuration to calculated days.
//!
//! The run is a fold over the entries in date order. [`DerivationState`]
//! carries the running totals from one day to the next; month start capitals
//! are resolved up front by [`MonthStarts`] from the month-end closes of the
//! raw entries, so no step has to look back into already emitted days.
//!
//! The output is newest first.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::domain::period::month_key;
use crate::domain::{percent_of, Amount, CalculatedDay, CapitalConfig, PeriodIds, TradeEntry};

/// Derive the calculated series for `entries`, newest first.
///
/// Total over any input: an empty list yields an empty series and every
/// percent with a zero base is 0.
#[must_use]
pub fn derive_days(entries: &[TradeEntry], config: &CapitalConfig) -> Vec<CalculatedDay> {
    let sorted = chronological(entries);
    let month_starts = MonthStarts::from_entries(config, &sorted);

    let mut state = DerivationState::new(config);
    let mut days: Vec<CalculatedDay> = sorted
        .iter()
        .map(|entry| {
            let month_start = month_starts.resolve(&month_key(entry.date));
            state.step(entry, month_start)
        })
        .collect();
    days.reverse();

    debug!(entries = entries.len(), days = days.len(), "Derived calculated days");
    days
}

/// Entries sorted ascending by date. Ties (which the store never produces)
/// fall back to the id so the result does not depend on input order.
fn chronological(entries: &[TradeEntry]) -> Vec<&TradeEntry> {
    let mut sorted: Vec<&TradeEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
    sorted
}

/// Start capital of every month, resolved before the fold runs.
#[derive(Debug, Clone)]
pub struct MonthStarts<'a> {
    config: &'a CapitalConfig,
    /// Final capital of the last entry of each `YYYY-MM`.
    closes: BTreeMap<String, Amount>,
}

impl<'a> MonthStarts<'a> {
    /// Collect month-end closes from entries sorted ascending by date.
    #[must_use]
    pub fn from_entries(config: &'a CapitalConfig, sorted: &[&TradeEntry]) -> Self {
        let mut closes = BTreeMap::new();
        for entry in sorted {
            closes.insert(month_key(entry.date), entry.final_capital);
        }
        Self { config, closes }
    }

    /// Start capital of `month`: the configured override, else the close of
    /// the latest earlier month with entries, else the journal baseline.
    #[must_use]
    pub fn resolve(&self, month: &str) -> Amount {
        if let Some(capital) = self.config.month_start_override(month) {
            return capital;
        }
        self.closes
            .range(..month.to_string())
            .next_back()
            .map_or(self.config.total_initial_capital, |(_, close)| *close)
    }
}

#[derive(Debug, Clone)]
struct WeekState {
    id: String,
    start_capital: Amount,
    pl: Amount,
}

/// Running totals carried between fold steps.
#[derive(Debug, Clone)]
pub struct DerivationState {
    total_pl: Amount,
    month_pl: HashMap<String, Amount>,
    week: Option<WeekState>,
    net_invested: Amount,
    previous_close: Amount,
}

impl DerivationState {
    /// State before the first entry: nothing earned, the baseline invested.
    #[must_use]
    pub fn new(config: &CapitalConfig) -> Self {
        Self {
            total_pl: Amount::ZERO,
            month_pl: HashMap::new(),
            week: None,
            net_invested: config.total_initial_capital,
            previous_close: config.total_initial_capital,
        }
    }

    /// Baseline plus every deposit minus every withdrawal seen so far.
    #[must_use]
    pub fn net_invested(&self) -> Amount {
        self.net_invested
    }

    /// Cumulative trading P/L of the days seen so far.
    #[must_use]
    pub fn total_pl(&self) -> Amount {
        self.total_pl
    }

    /// Compute the next day. Entries must be fed in ascending date order.
    pub fn step(&mut self, entry: &TradeEntry, month_start: Amount) -> CalculatedDay {
        let ids = PeriodIds::for_date(entry.date);
        let flow = entry.deposit.saturating_sub(entry.withdrawal);

        let initial_capital_daily = entry
            .initial_capital
            .unwrap_or(self.previous_close.saturating_add(flow));
        self.net_invested = self.net_invested.saturating_add(flow);

        let pl_daily_dollar = entry.final_capital.saturating_sub(initial_capital_daily);

        let week = match self.week.take() {
            Some(week) if week.id == ids.week => week,
            _ => WeekState {
                id: ids.week.clone(),
                start_capital: initial_capital_daily,
                pl: Amount::ZERO,
            },
        };
        let week = self.week.insert(WeekState {
            pl: week.pl.saturating_add(pl_daily_dollar),
            ..week
        });
        let pl_week_to_date_dollar = week.pl;
        let pl_week_to_date_percent = percent_of(week.pl, week.start_capital);

        let month_pl = self.month_pl.entry(ids.month.clone()).or_default();
        *month_pl = month_pl.saturating_add(pl_daily_dollar);
        let pl_month_to_date_dollar = *month_pl;

        self.total_pl = self.total_pl.saturating_add(pl_daily_dollar);
        self.previous_close = entry.final_capital;

        CalculatedDay {
            id: entry.id.clone(),
            date: entry.date,
            final_capital: entry.final_capital,
            initial_capital_daily,
            deposit: entry.deposit,
            withdrawal: entry.withdrawal,
            trade_count: entry.trade_count,
            notes: entry.notes.clone(),
            pl_daily_dollar,
            pl_daily_percent: percent_of(pl_daily_dollar, initial_capital_daily),
            pl_week_to_date_dollar,
            pl_week_to_date_percent,
            initial_capital_monthly: month_start,
            pl_month_to_date_dollar,
            pl_month_to_date_percent: percent_of(pl_month_to_date_dollar, month_start),
            initial_capital_total: self.net_invested,
            pl_total_to_date_dollar: self.total_pl,
            pl_total_to_date_percent: percent_of(self.total_pl, self.net_invested),
            week_id: ids.week,
            month_id: ids.month,
            quarter_id: ids.quarter,
            year_id: ids.year,
        }
    }
}
