//! Plain-text report of the notes journal.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::application::notes::is_winner;
use crate::domain::CalculatedDay;

const RULE: &str = "------------------------------------------------------------";

/// Render the selected days as a readable report, in the order given.
#[must_use]
pub fn notes_report(days: &[&CalculatedDay], generated_on: NaiveDate) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "TRADING JOURNAL");
    let _ = writeln!(out, "Generated: {}", generated_on.format("%Y-%m-%d"));
    let _ = writeln!(out, "Entries: {}", days.len());
    let _ = writeln!(out, "{}", "=".repeat(RULE.len()));

    for day in days {
        let verdict = if is_winner(day) { "WINNER" } else { "LOSER" };
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", day.date.format("%Y-%m-%d"), day.date.format("%A"));
        let _ = writeln!(
            out,
            "Result: ${:.2} ({:.2}%) {verdict}",
            day.pl_daily_dollar, day.pl_daily_percent
        );
        let _ = writeln!(out, "Trades: {}", day.trade_count);
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{}", day.notes.trim_end());
    }
    out
}
