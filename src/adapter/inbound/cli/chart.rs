//! Handler for `chart`: capital sparkline and daily P/L bars.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::json;

use crate::adapter::inbound::cli::command::ChartArgs;
use crate::adapter::inbound::cli::format::{money, pl_money};
use crate::adapter::inbound::cli::output;
use crate::application::Journal;
use crate::domain::{Amount, CalculatedDay};
use crate::error::Result;

const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const BAR_WIDTH: usize = 30;

/// One block per value, scaled between the lowest and highest value.
fn sparkline(values: &[Amount]) -> String {
    let (Some(low), Some(high)) = (values.iter().min(), values.iter().max()) else {
        return String::new();
    };
    let range = high.saturating_sub(*low);
    let top = Decimal::from(SPARKS.len() - 1);

    values
        .iter()
        .map(|value| {
            if range.is_zero() {
                return SPARKS[3];
            }
            let level = value
                .saturating_sub(*low)
                .checked_div(range)
                .and_then(|fraction| fraction.checked_mul(top))
                .unwrap_or(Decimal::ZERO)
                .round()
                .to_usize()
                .unwrap_or(0);
            SPARKS[level.min(SPARKS.len() - 1)]
        })
        .collect()
}

/// Bar length for `value` relative to the largest magnitude `scale`.
/// Non-zero values always get at least one block.
fn bar_len(value: Amount, scale: Amount) -> usize {
    if value.is_zero() || scale.is_zero() {
        return 0;
    }
    value
        .abs()
        .checked_div(scale)
        .and_then(|fraction| fraction.checked_mul(Decimal::from(BAR_WIDTH)))
        .unwrap_or(Decimal::ZERO)
        .round()
        .to_usize()
        .unwrap_or(0)
        .clamp(1, BAR_WIDTH)
}

fn pl_rows(days: &[&CalculatedDay]) -> Vec<String> {
    let scale = days
        .iter()
        .map(|day| day.pl_daily_dollar.abs())
        .max()
        .unwrap_or(Decimal::ZERO);
    days.iter()
        .map(|day| {
            let bar = "█".repeat(bar_len(day.pl_daily_dollar, scale));
            format!(
                "{}  {}  {}",
                day.date.format("%Y-%m-%d"),
                output::by_sign(day.pl_daily_dollar, format!("{bar:<BAR_WIDTH$}")),
                pl_money(day.pl_daily_dollar)
            )
        })
        .collect()
}

/// Execute `chart`.
pub fn execute(journal: &Journal, args: &ChartArgs) -> Result<()> {
    let snapshot = journal.snapshot();
    let mut days: Vec<&CalculatedDay> = snapshot.days.iter().take(args.limit).collect();
    days.reverse();

    if output::is_json() {
        let points: Vec<_> = days
            .iter()
            .map(|day| {
                json!({
                    "date": day.date,
                    "capital": day.final_capital,
                    "plDailyDollar": day.pl_daily_dollar,
                })
            })
            .collect();
        output::json_output(json!({
            "command": "chart",
            "points": points,
        }));
        return Ok(());
    }
    if output::is_quiet() {
        return Ok(());
    }

    if days.is_empty() {
        output::note("No entries yet.");
        output::hint("record a day with `tradebook add --capital <amount>`");
        return Ok(());
    }

    let capital: Vec<Amount> = days.iter().map(|day| day.final_capital).collect();
    output::section("Capital");
    output::lines(&output::highlight(sparkline(&capital)));
    if let (Some(low), Some(high)) = (capital.iter().min(), capital.iter().max()) {
        output::field("Low", money(*low));
        output::field("High", money(*high));
    }

    output::section("Daily P/L");
    output::lines(&pl_rows(&days).join("\n"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rising_series_spans_all_levels() {
        let values = [
            dec!(0),
            dec!(1),
            dec!(2),
            dec!(3),
            dec!(4),
            dec!(5),
            dec!(6),
            dec!(7),
        ];
        assert_eq!(sparkline(&values), "▁▂▃▄▅▆▇█");
    }

    #[test]
    fn flat_series_sits_mid_height() {
        assert_eq!(sparkline(&[dec!(500), dec!(500), dec!(500)]), "▄▄▄");
    }

    #[test]
    fn empty_series_is_blank() {
        assert_eq!(sparkline(&[]), "");
    }

    #[test]
    fn extreme_capital_does_not_overflow() {
        assert_eq!(sparkline(&[Decimal::MIN, Decimal::MAX]), "▁█");
    }

    #[test]
    fn bars_scale_to_the_largest_move() {
        assert_eq!(bar_len(dec!(-200), dec!(200)), BAR_WIDTH);
        assert_eq!(bar_len(dec!(100), dec!(200)), BAR_WIDTH / 2);
        assert_eq!(bar_len(dec!(0.01), dec!(200)), 1);
        assert_eq!(bar_len(Decimal::ZERO, dec!(200)), 0);
    }
}
