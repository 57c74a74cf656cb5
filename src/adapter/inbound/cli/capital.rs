//! Handler for the `capital` command group.

use serde_json::json;

use crate::adapter::inbound::cli::command::CapitalCommand;
use crate::adapter::inbound::cli::format::money;
use crate::adapter::inbound::cli::output;
use crate::application::Journal;
use crate::error::Result;

fn show(journal: &Journal) {
    let config = journal.config();
    if output::is_json() {
        output::json_output(json!({
            "command": "capital.show",
            "config": config,
        }));
        return;
    }

    output::section("Capital");
    output::field("Baseline", money(config.total_initial_capital));
    output::section("Month starts");
    if config.monthly_start_capitals.is_empty() {
        output::note("(none pinned, months roll forward from the previous close)");
        return;
    }
    for (month, amount) in &config.monthly_start_capitals {
        output::field(month, money(*amount));
    }
}

/// Execute a `capital` subcommand.
pub fn execute(journal: &mut Journal, command: CapitalCommand) -> Result<()> {
    match command {
        CapitalCommand::Show => {}
        CapitalCommand::Set { amount } => {
            journal.set_initial_capital(amount)?;
            if !output::is_json() {
                output::success(&format!("Baseline set to {}", money(amount)));
            }
        }
        CapitalCommand::Month { month, amount } => {
            journal.set_month_start(&month, amount)?;
            if !output::is_json() {
                output::success(&format!("{} starts at {}", month.trim(), money(amount)));
            }
        }
        CapitalCommand::ClearMonth { month } => {
            let removed = journal.clear_month_start(&month)?;
            if !output::is_json() {
                match removed {
                    Some(_) => output::success(&format!("{} rolls forward again", month.trim())),
                    None => output::note(&format!("{} had no pinned start", month.trim())),
                }
            }
        }
    }
    show(journal);
    Ok(())
}
