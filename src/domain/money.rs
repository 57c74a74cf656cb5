//! Monetary types and percent arithmetic.

use rust_decimal::Decimal;

/// Account balance or cash amount, in the journal's single currency.
pub type Amount = Decimal;

/// Percent value, `10` meaning 10%.
pub type Percent = Decimal;

/// Express `value` as a percent of `base`.
///
/// A zero base, or a quotient too large for a `Decimal`, yields 0: every
/// percent in the journal goes through here so no degenerate capital base can
/// leak into a result.
#[must_use]
pub fn percent_of(value: Amount, base: Amount) -> Percent {
    if base.is_zero() {
        return Decimal::ZERO;
    }
    value
        .checked_div(base)
        .and_then(|quotient| quotient.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Sum that saturates at the `Decimal` bounds instead of panicking.
#[must_use]
pub fn total(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}

/// Arithmetic mean, 0 for an empty slice.
#[must_use]
pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    total(values.iter().copied())
        .checked_div(Decimal::from(values.len()))
        .unwrap_or(Decimal::ZERO)
}

/// Ratio `numerator / denominator` as a decimal, 0 when the denominator is 0.
#[must_use]
pub fn ratio(numerator: impl Into<Decimal>, denominator: usize) -> Decimal {
    if denominator == 0 {
        Decimal::ZERO
    } else {
        numerator.into() / Decimal::from(denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percent_of_regular_base() {
        assert_eq!(percent_of(dec!(100), dec!(1000)), dec!(10));
    }

    #[test]
    fn percent_of_zero_base_is_zero() {
        assert_eq!(percent_of(dec!(100), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percent_of(dec!(-50), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn percent_of_overflowing_quotient_is_zero() {
        let huge = Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0);
        assert_eq!(percent_of(huge, dec!(0.000000001)), Decimal::ZERO);
        assert_eq!(percent_of(-huge, dec!(0.000000001)), Decimal::ZERO);
    }

    #[test]
    fn total_saturates_at_bounds() {
        assert_eq!(total([Decimal::MAX, Decimal::ONE]), Decimal::MAX);
        assert_eq!(total([Decimal::MIN, dec!(-1)]), Decimal::MIN);
        assert_eq!(total([dec!(1.5), dec!(2.5)]), dec!(4));
    }

    #[test]
    fn mean_of_huge_values_does_not_panic() {
        assert_eq!(mean(&[Decimal::MAX, Decimal::MAX]), Decimal::MAX / dec!(2));
    }

    #[test]
    fn percent_of_negative_value() {
        assert_eq!(percent_of(dec!(-25), dec!(500)), dec!(-5));
    }

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), Decimal::ZERO);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[dec!(10), dec!(20), dec!(60)]), dec!(30));
    }

    #[test]
    fn ratio_guards_zero_denominator() {
        assert_eq!(ratio(12u32, 0), Decimal::ZERO);
        assert_eq!(ratio(12u32, 4), dec!(3));
    }
}
