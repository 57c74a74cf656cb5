//! Handler for `notes`.

use chrono::Local;
use serde_json::json;

use crate::adapter::inbound::cli::command::NotesArgs;
use crate::adapter::inbound::cli::format::{percent, signed_money};
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::export::notes_report;
use crate::application::notes::{is_winner, journal_notes, NotesFilter};
use crate::application::Journal;
use crate::error::Result;

impl From<&NotesArgs> for NotesFilter {
    fn from(args: &NotesArgs) -> Self {
        Self {
            search: args.search.clone(),
            outcome: args.outcome.into(),
            weekday: args.weekday,
            from: args.from,
            to: args.to,
            oldest_first: args.oldest_first,
        }
    }
}

/// Execute `notes`.
pub fn execute(journal: &Journal, args: &NotesArgs) -> Result<()> {
    let filter = NotesFilter::from(args);
    let snapshot = journal.snapshot();
    let selected = journal_notes(&snapshot.days, &filter);

    if let Some(path) = &args.output {
        std::fs::write(path, notes_report(&selected, Local::now().date_naive()))?;
        if output::is_json() {
            output::json_output(json!({
                "command": "notes",
                "written": selected.len(),
                "path": path.display().to_string(),
            }));
        } else {
            output::success(&format!("Wrote {} days to {}", selected.len(), path.display()));
        }
        return Ok(());
    }

    if output::is_json() {
        output::json_output(json!({
            "command": "notes",
            "filtered": filter.is_active(),
            "days": selected,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    if selected.is_empty() {
        output::section("Notes");
        output::note(if filter.is_active() {
            "No notes match these filters."
        } else {
            "No notes written yet."
        });
        return Ok(());
    }

    for day in &selected {
        let verdict = if is_winner(day) { "winner" } else { "loser" };
        output::section(&format!(
            "{} {}",
            day.date.format("%Y-%m-%d"),
            day.date.format("%A")
        ));
        output::field(
            "Result",
            output::by_sign(
                day.pl_daily_dollar,
                format!(
                    "{} ({}) {verdict}",
                    signed_money(day.pl_daily_dollar),
                    percent(day.pl_daily_percent)
                ),
            ),
        );
        output::field("Trades", day.trade_count);
        output::lines(day.notes.trim());
    }
    Ok(())
}
