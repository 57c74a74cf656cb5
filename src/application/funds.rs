//! Cash-flow view: deposits and withdrawals per granularity.

use serde::Serialize;

use crate::domain::{ratio, total, Amount, Period};

use super::snapshot::Snapshot;

/// Granularity of the cash-flow view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundsView {
    /// Journal-wide totals only.
    Global,
    Daily,
    Period(Period),
}

/// One row of the cash-flow table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRow {
    pub label: String,
    pub deposits: Amount,
    pub withdrawals: Amount,
}

impl FlowRow {
    #[must_use]
    pub fn net(&self) -> Amount {
        self.deposits.saturating_sub(self.withdrawals)
    }
}

/// Deposit and withdrawal totals for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsReport {
    pub total_deposits: Amount,
    pub total_withdrawals: Amount,
    pub net_flow: Amount,
    /// Periods with at least one deposit.
    pub deposit_count: usize,
    pub withdrawal_count: usize,
    /// Mean deposit over the periods that had one.
    pub avg_deposit: Amount,
    pub avg_withdrawal: Amount,
    /// Periods with any cash flow, most recent first.
    pub rows: Vec<FlowRow>,
}

/// Build the cash-flow report for `view`.
#[must_use]
pub fn funds_report(snapshot: &Snapshot, view: FundsView) -> FundsReport {
    let rows: Vec<FlowRow> = match view {
        FundsView::Global => {
            let stats = &snapshot.stats;
            return FundsReport {
                total_deposits: stats.total_deposits,
                total_withdrawals: stats.total_withdrawals,
                net_flow: stats.net_cash_flow,
                deposit_count: 0,
                withdrawal_count: 0,
                avg_deposit: Amount::ZERO,
                avg_withdrawal: Amount::ZERO,
                rows: Vec::new(),
            };
        }
        FundsView::Daily => snapshot
            .days
            .iter()
            .map(|day| FlowRow {
                label: day.date.format("%Y-%m-%d").to_string(),
                deposits: day.deposit,
                withdrawals: day.withdrawal,
            })
            .collect(),
        FundsView::Period(period) => snapshot
            .summaries(period)
            .iter()
            .map(|summary| FlowRow {
                label: summary.label.clone(),
                deposits: summary.total_deposits,
                withdrawals: summary.total_withdrawals,
            })
            .collect(),
    };

    let total_deposits = total(rows.iter().map(|row| row.deposits));
    let total_withdrawals = total(rows.iter().map(|row| row.withdrawals));
    let deposit_count = rows.iter().filter(|row| row.deposits > Amount::ZERO).count();
    let withdrawal_count = rows
        .iter()
        .filter(|row| row.withdrawals > Amount::ZERO)
        .count();

    FundsReport {
        total_deposits,
        total_withdrawals,
        net_flow: total_deposits.saturating_sub(total_withdrawals),
        deposit_count,
        withdrawal_count,
        avg_deposit: ratio(total_deposits, deposit_count),
        avg_withdrawal: ratio(total_withdrawals, withdrawal_count),
        rows: rows
            .into_iter()
            .filter(|row| row.deposits > Amount::ZERO || row.withdrawals > Amount::ZERO)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CapitalConfig, EntryFields, EntryId, TradeEntry};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn snapshot() -> Snapshot {
        let day = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let entries = [
            TradeEntry::new(
                EntryId::new("a"),
                day(2),
                EntryFields::closing(dec!(1300)).with_deposit(dec!(300)),
            ),
            TradeEntry::new(EntryId::new("b"), day(3), EntryFields::closing(dec!(1310))),
            TradeEntry::new(
                EntryId::new("c"),
                day(10),
                EntryFields::closing(dec!(1410)).with_deposit(dec!(100)),
            ),
            TradeEntry::new(
                EntryId::new("d"),
                day(11),
                EntryFields::closing(dec!(1360)).with_withdrawal(dec!(50)),
            ),
        ];
        Snapshot::build(&entries, &CapitalConfig::default())
    }

    #[test]
    fn global_view_uses_stats_totals() {
        let report = funds_report(&snapshot(), FundsView::Global);

        assert_eq!(report.total_deposits, dec!(400));
        assert_eq!(report.total_withdrawals, dec!(50));
        assert_eq!(report.net_flow, dec!(350));
        assert!(report.rows.is_empty());
        assert_eq!(report.avg_deposit, dec!(0));
    }

    #[test]
    fn daily_view_lists_only_days_with_flow() {
        let report = funds_report(&snapshot(), FundsView::Daily);

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.deposit_count, 2);
        assert_eq!(report.withdrawal_count, 1);
        assert_eq!(report.avg_deposit, dec!(200));
        assert_eq!(report.rows[0].label, "2024-01-11");
        assert_eq!(report.rows[0].net(), dec!(-50));
    }

    #[test]
    fn weekly_view_averages_over_active_weeks() {
        let report = funds_report(&snapshot(), FundsView::Period(Period::Week));

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.deposit_count, 2);
        assert_eq!(report.avg_deposit, dec!(200));
        assert_eq!(report.avg_withdrawal, dec!(50));
    }
}
