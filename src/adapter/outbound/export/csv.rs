//! Spreadsheet export of the calculated series.

use std::io::Write;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::CalculatedDay;
use crate::error::Result;

/// Byte order mark so spreadsheet tools detect UTF-8.
const BOM: &str = "\u{FEFF}";

const HEADERS: [&str; 13] = [
    "Date",
    "Week",
    "Month",
    "Daily Initial Capital",
    "Daily Final Capital",
    "Daily P/L ($)",
    "Daily P/L (%)",
    "Weekly P/L ($)",
    "Weekly P/L (%)",
    "Monthly P/L ($)",
    "Monthly P/L (%)",
    "Total P/L ($)",
    "Total P/L (%)",
];

/// Write `days` (newest first, as derived) oldest first as CSV.
///
/// Dollar columns carry two decimals; percent columns are fractions with
/// four decimals (`10%` is `0.1000`).
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn write_days<W: Write>(mut out: W, days: &[CalculatedDay]) -> Result<()> {
    out.write_all(BOM.as_bytes())?;

    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    wtr.write_record(HEADERS)?;

    for day in days.iter().rev() {
        wtr.write_record([
            day.date.format("%Y-%m-%d").to_string(),
            day.week_id.clone(),
            day.month_id.clone(),
            dollars(day.initial_capital_daily),
            dollars(day.final_capital),
            dollars(day.pl_daily_dollar),
            fraction(day.pl_daily_percent),
            dollars(day.pl_week_to_date_dollar),
            fraction(day.pl_week_to_date_percent),
            dollars(day.pl_month_to_date_dollar),
            fraction(day.pl_month_to_date_percent),
            dollars(day.pl_total_to_date_dollar),
            fraction(day.pl_total_to_date_percent),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

fn dollars(value: Decimal) -> String {
    fixed(value, 2)
}

fn fraction(percent: Decimal) -> String {
    fixed(percent / Decimal::ONE_HUNDRED, 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::derivation::derive_days;
    use crate::domain::{CapitalConfig, EntryFields, EntryId, TradeEntry};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn writes_bom_header_and_rows_oldest_first() {
        let entries = [
            TradeEntry::new(
                EntryId::new("a"),
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                EntryFields::closing(dec!(1100)),
            ),
            TradeEntry::new(
                EntryId::new("b"),
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
                EntryFields::closing(dec!(1045)),
            ),
        ];
        let days = derive_days(&entries, &CapitalConfig::default());

        let mut buf = Vec::new();
        write_days(&mut buf, &days).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with(BOM));
        let lines: Vec<&str> = text.trim_start_matches(BOM).lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Date,Week,Month,"));
        assert_eq!(
            lines[1],
            "2024-01-02,Week 01/01 - 05/01/2024,2024-01,1000.00,1100.00,100.00,0.1000,100.00,0.1000,100.00,0.1000,100.00,0.1000"
        );
        assert!(lines[2].starts_with("2024-01-03,"));
        assert!(lines[2].contains(",-55.00,-0.0500,"));
    }

    #[test]
    fn empty_series_writes_header_only() {
        let mut buf = Vec::new();
        write_days(&mut buf, &[]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim_start_matches(BOM).lines().count(), 1);
    }
}
