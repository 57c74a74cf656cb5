//! Handlers for `add`, `edit`, `delete` and `list`.

use chrono::{Local, NaiveDate};
use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::{AddArgs, DeleteArgs, EditArgs, ListArgs};
use crate::adapter::inbound::cli::format::{money, pl_plain};
use crate::adapter::inbound::cli::{output, prompt};
use crate::application::{AddOutcome, Journal, UpdateOutcome};
use crate::domain::{CalculatedDay, EntryFields, EntryId, TradeEntry};
use crate::error::Result;

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Capital")]
    capital: String,
    #[tabled(rename = "Day")]
    daily: String,
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Trades")]
    trades: u32,
    #[tabled(rename = "Id")]
    id: String,
}

impl From<&CalculatedDay> for DayRow {
    fn from(day: &CalculatedDay) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            capital: money(day.final_capital),
            daily: pl_plain(day.pl_daily_dollar, day.pl_daily_percent),
            week: pl_plain(day.pl_week_to_date_dollar, day.pl_week_to_date_percent),
            month: pl_plain(day.pl_month_to_date_dollar, day.pl_month_to_date_percent),
            total: pl_plain(day.pl_total_to_date_dollar, day.pl_total_to_date_percent),
            trades: day.trade_count,
            id: day.id.to_string(),
        }
    }
}

fn report(command: &str, outcome: &str, id: &EntryId, date: NaiveDate, message: &str) {
    if output::is_json() {
        output::json_output(json!({
            "command": command,
            "outcome": outcome,
            "id": id.as_str(),
            "date": date,
        }));
        return;
    }
    output::success(message);
    output::field("Id", id);
}

fn unchanged(command: &str) {
    if output::is_json() {
        output::json_output(json!({ "command": command, "outcome": "cancelled" }));
        return;
    }
    output::note("Nothing changed.");
}

/// Execute `add`.
pub fn execute_add(journal: &mut Journal, args: AddArgs) -> Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let fields = EntryFields {
        final_capital: args.capital,
        deposit: args.deposit,
        withdrawal: args.withdrawal,
        trade_count: args.trades,
        notes: args.notes,
    };

    match journal.add(date, fields)? {
        AddOutcome::Created(id) => {
            report("add", "created", &id, date, &format!("Recorded {date}"));
        }
        AddOutcome::Merged(id) => {
            report(
                "add",
                "merged",
                &id,
                date,
                &format!("Updated {date}, keeping its manual start capital"),
            );
        }
        AddOutcome::Conflict { existing } => {
            if !output::is_json() {
                output::warning(&format!(
                    "{date} already has an entry closing at {}",
                    money(existing.final_capital)
                ));
            }
            if prompt::confirm("Overwrite it?", args.confirm.yes)? {
                journal.confirm_pending()?;
                report("add", "overwritten", &existing.id, date, &format!("Overwrote {date}"));
            } else {
                journal.discard_pending();
                unchanged("add");
            }
        }
    }
    Ok(())
}

/// Fields for an edit: command-line values over the current entry.
fn edited_fields(current: &TradeEntry, args: &EditArgs) -> EntryFields {
    let mut fields = current.fields();
    if let Some(capital) = args.capital {
        fields.final_capital = capital;
    }
    if let Some(deposit) = args.deposit {
        fields.deposit = deposit;
    }
    if let Some(withdrawal) = args.withdrawal {
        fields.withdrawal = withdrawal;
    }
    if let Some(trades) = args.trades {
        fields.trade_count = trades;
    }
    if let Some(notes) = &args.notes {
        fields.notes.clone_from(notes);
    }
    fields
}

/// Execute `edit`.
pub fn execute_edit(journal: &mut Journal, args: EditArgs) -> Result<()> {
    let id = EntryId::new(args.id.trim());
    let current = journal
        .entry(&id)
        .cloned()
        .ok_or_else(|| crate::error::JournalError::EntryNotFound(id.clone()))?;
    let date = args.date.unwrap_or(current.date);
    let fields = edited_fields(&current, &args);

    match journal.update(&id, date, fields)? {
        UpdateOutcome::Updated(id) => {
            report("edit", "updated", &id, date, &format!("Updated entry for {date}"));
        }
        UpdateOutcome::Collision { occupant } => {
            if !output::is_json() {
                output::warning(&format!(
                    "{date} already has another entry closing at {}",
                    money(occupant.final_capital)
                ));
            }
            if prompt::confirm("Replace that entry?", args.confirm.yes)? {
                journal.confirm_pending()?;
                report("edit", "replaced", &id, date, &format!("Moved entry to {date}"));
            } else {
                journal.discard_pending();
                unchanged("edit");
            }
        }
    }
    Ok(())
}

/// Execute `delete`.
pub fn execute_delete(journal: &mut Journal, args: DeleteArgs) -> Result<()> {
    let id = EntryId::new(args.id.trim());
    let date = journal.request_delete(&id)?.date;

    if prompt::confirm(&format!("Delete the entry for {date}?"), args.confirm.yes)? {
        journal.confirm_pending()?;
        report("delete", "deleted", &id, date, &format!("Deleted {date}"));
    } else {
        journal.discard_pending();
        unchanged("delete");
    }
    Ok(())
}

/// Execute `list`.
pub fn execute_list(journal: &Journal, args: &ListArgs) -> Result<()> {
    let snapshot = journal.snapshot();
    let limit = args.limit.unwrap_or(usize::MAX);
    let days: Vec<&CalculatedDay> = snapshot.days.iter().take(limit).collect();

    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "days": days,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::section("Journal");
    if days.is_empty() {
        output::note("No entries yet.");
        output::hint("record a day with `tradebook add --capital <amount>`");
        return Ok(());
    }
    let table = Table::new(days.into_iter().map(DayRow::from)).to_string();
    output::lines(&table);
    if snapshot.days.len() > limit {
        output::note(&format!("{} older days not shown", snapshot.days.len() - limit));
    }
    Ok(())
}
