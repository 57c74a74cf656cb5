//! Handler for `calendar`.

use chrono::{Datelike, Local, NaiveDate};
use serde_json::json;

use crate::adapter::inbound::cli::command::CalendarArgs;
use crate::adapter::inbound::cli::format::{money, signed_money};
use crate::adapter::inbound::cli::output;
use crate::application::calendar::{CalendarCell, MonthCalendar};
use crate::application::Journal;
use crate::domain::period::parse_month_key;
use crate::domain::Amount;
use crate::error::{JournalError, Result};

const CELL_WIDTH: usize = 11;
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn cell_text(cell: Option<&CalendarCell>) -> (String, Option<Amount>) {
    match cell {
        None => (String::new(), None),
        Some(CalendarCell { date, day: None }) => (format!("{:>2}", date.day()), None),
        Some(CalendarCell {
            date,
            day: Some(day),
        }) => (
            format!("{:>2} {}", date.day(), signed_money(day.pl_daily_dollar)),
            Some(day.pl_daily_dollar),
        ),
    }
}

fn grid_lines(calendar: &MonthCalendar) -> Vec<String> {
    let header = WEEKDAYS
        .iter()
        .map(|name| format!("{name:<CELL_WIDTH$}"))
        .collect::<String>();
    let mut lines = vec![output::muted(header.trim_end())];
    for week in calendar.weeks() {
        let mut line = String::new();
        for cell in week {
            let (text, pl) = cell_text(cell);
            let padded = format!("{text:<CELL_WIDTH$}");
            line.push_str(&match pl {
                Some(pl) => output::by_sign(pl, padded),
                None => padded,
            });
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

fn resolve_month(journal: &Journal, month: Option<&str>) -> Result<NaiveDate> {
    match month {
        Some(key) => {
            parse_month_key(key).ok_or_else(|| JournalError::InvalidMonth(key.to_string()).into())
        }
        None => Ok(journal
            .entries()
            .iter()
            .map(|entry| entry.date)
            .max()
            .unwrap_or_else(|| Local::now().date_naive())),
    }
}

/// Execute `calendar`.
pub fn execute(journal: &Journal, args: &CalendarArgs) -> Result<()> {
    let first = resolve_month(journal, args.month.as_deref())?;
    let snapshot = journal.snapshot();
    let calendar = MonthCalendar::build(&snapshot.days, first);

    if output::is_json() {
        output::json_output(json!({
            "command": "calendar",
            "calendar": calendar,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    output::section(&first.format("%B %Y").to_string());
    for line in grid_lines(&calendar) {
        output::lines(&line);
    }
    output::section("Month");
    output::field(
        "P/L",
        output::by_sign(calendar.pl_dollar, signed_money(calendar.pl_dollar)),
    );
    output::field(
        "Days",
        format!(
            "{} won, {} lost",
            calendar.winning_days, calendar.losing_days
        ),
    );
    if let Some(last) = calendar.cells.iter().rev().find_map(|cell| cell.day.as_ref()) {
        output::field("Close", money(last.final_capital));
    }
    Ok(())
}
