//! Handler for `periods`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::PeriodsArgs;
use crate::adapter::inbound::cli::format::{money, percent, pl_plain};
use crate::adapter::inbound::cli::output;
use crate::application::Journal;
use crate::domain::{Period, PeriodSummary};
use crate::error::Result;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Period")]
    label: String,
    #[tabled(rename = "P/L")]
    pl: String,
    #[tabled(rename = "Win rate")]
    win_rate: String,
    #[tabled(rename = "Days")]
    days: usize,
    #[tabled(rename = "Trades")]
    trades: u64,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Net flow")]
    net_flow: String,
}

impl From<&PeriodSummary> for SummaryRow {
    fn from(summary: &PeriodSummary) -> Self {
        Self {
            label: summary.label.clone(),
            pl: pl_plain(summary.pl_dollar, summary.pl_percent),
            win_rate: percent(summary.win_rate),
            days: summary.day_count,
            trades: summary.total_operations,
            start: money(summary.start_capital),
            end: money(summary.end_capital),
            net_flow: money(summary.net_cash_flow()),
        }
    }
}

fn title(period: Period) -> &'static str {
    match period {
        Period::Week => "Weeks",
        Period::Month => "Months",
        Period::Quarter => "Quarters",
        Period::Year => "Years",
    }
}

/// Execute `periods`.
pub fn execute(journal: &Journal, args: &PeriodsArgs) -> Result<()> {
    let period = Period::from(args.period);
    let snapshot = journal.snapshot();
    let summaries = snapshot.summaries(period);
    let shown = &summaries[..args.limit.unwrap_or(summaries.len()).min(summaries.len())];

    if output::is_json() {
        output::json_output(json!({
            "command": "periods",
            "period": period.label(),
            "summaries": shown,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::section(title(period));
    if shown.is_empty() {
        output::note("No entries yet.");
        return Ok(());
    }
    output::lines(&Table::new(shown.iter().map(SummaryRow::from)).to_string());
    Ok(())
}
