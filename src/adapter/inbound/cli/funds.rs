//! Handler for `funds`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::FundsArgs;
use crate::adapter::inbound::cli::format::{money, signed_money};
use crate::adapter::inbound::cli::output;
use crate::application::funds::{funds_report, FlowRow, FundsView};
use crate::application::Journal;
use crate::error::Result;

#[derive(Tabled)]
struct FlowLine {
    #[tabled(rename = "Period")]
    label: String,
    #[tabled(rename = "Deposits")]
    deposits: String,
    #[tabled(rename = "Withdrawals")]
    withdrawals: String,
    #[tabled(rename = "Net")]
    net: String,
}

impl From<&FlowRow> for FlowLine {
    fn from(row: &FlowRow) -> Self {
        Self {
            label: row.label.clone(),
            deposits: money(row.deposits),
            withdrawals: money(row.withdrawals),
            net: signed_money(row.net()),
        }
    }
}

/// Execute `funds`.
pub fn execute(journal: &Journal, args: &FundsArgs) -> Result<()> {
    let view = FundsView::from(args.view);
    let report = funds_report(&journal.snapshot(), view);

    if output::is_json() {
        output::json_output(json!({
            "command": "funds",
            "view": format!("{:?}", args.view).to_lowercase(),
            "report": report,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::section("Cash flow");
    output::field("Deposits", money(report.total_deposits));
    output::field("Withdrawals", money(report.total_withdrawals));
    output::field("Net", output::by_sign(report.net_flow, signed_money(report.net_flow)));

    if view == FundsView::Global {
        return Ok(());
    }

    output::field(
        "Deposit periods",
        format!("{} (avg {})", report.deposit_count, money(report.avg_deposit)),
    );
    output::field(
        "Withdrawal periods",
        format!(
            "{} (avg {})",
            report.withdrawal_count,
            money(report.avg_withdrawal)
        ),
    );

    output::section("Movements");
    if report.rows.is_empty() {
        output::note("No deposits or withdrawals recorded.");
        return Ok(());
    }
    output::lines(&Table::new(report.rows.iter().map(FlowLine::from)).to_string());
    Ok(())
}
