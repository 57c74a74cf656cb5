//! Money and percent rendering for terminal output.

use rust_decimal::{Decimal, RoundingStrategy};

use super::output;

fn two_dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `$1234.50`, `-$55.00`.
#[must_use]
pub fn money(value: Decimal) -> String {
    let value = two_dp(value);
    if value < Decimal::ZERO {
        format!("-${:.2}", value.abs())
    } else {
        format!("${value:.2}")
    }
}

/// Money with an explicit sign: `+$100.00`, `-$55.00`.
#[must_use]
pub fn signed_money(value: Decimal) -> String {
    if two_dp(value) > Decimal::ZERO {
        format!("+{}", money(value))
    } else {
        money(value)
    }
}

/// [`signed_money`] colored by direction.
#[must_use]
pub fn pl_money(value: Decimal) -> String {
    output::by_sign(value, signed_money(value))
}

/// `12.34%`.
#[must_use]
pub fn percent(value: Decimal) -> String {
    format!("{:.2}%", two_dp(value))
}

/// Percent with an explicit sign: `+10.00%`.
#[must_use]
pub fn signed_percent(value: Decimal) -> String {
    if two_dp(value) > Decimal::ZERO {
        format!("+{}", percent(value))
    } else {
        percent(value)
    }
}

/// P/L as `+$100.00 (+10.00%)`, uncolored for table cells.
#[must_use]
pub fn pl_plain(dollar: Decimal, pct: Decimal) -> String {
    format!("{} ({})", signed_money(dollar), signed_percent(pct))
}

/// [`pl_plain`] colored by the dollar figure.
#[must_use]
pub fn pl(dollar: Decimal, pct: Decimal) -> String {
    output::by_sign(dollar, pl_plain(dollar, pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_places_sign_before_symbol() {
        assert_eq!(money(dec!(1234.5)), "$1234.50");
        assert_eq!(money(dec!(-55)), "-$55.00");
        assert_eq!(money(dec!(0.005)), "$0.01");
    }

    #[test]
    fn pl_shows_explicit_sign() {
        assert_eq!(pl_plain(dec!(100), dec!(10)), "+$100.00 (+10.00%)");
        assert_eq!(pl_plain(dec!(-55), dec!(-5)), "-$55.00 (-5.00%)");
        assert_eq!(pl_plain(Decimal::ZERO, Decimal::ZERO), "$0.00 (0.00%)");
    }

    #[test]
    fn percent_rounds_to_two_places() {
        assert_eq!(percent(dec!(4.545454)), "4.55%");
        assert_eq!(percent(Decimal::ZERO), "0.00%");
    }
}
