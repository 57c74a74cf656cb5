//! Capital configuration: the journal-wide baseline and month overrides.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Amount;

/// Baseline capital used when nothing else is configured.
pub const DEFAULT_INITIAL_CAPITAL: i64 = 1000;

fn default_total_initial_capital() -> Amount {
    Decimal::from(DEFAULT_INITIAL_CAPITAL)
}

/// Global capital settings, one per journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalConfig {
    /// Capital before the first recorded entry.
    #[serde(default = "default_total_initial_capital")]
    pub total_initial_capital: Amount,

    /// Explicit start capital per `YYYY-MM`, used instead of rolling the
    /// previous month's close forward.
    #[serde(default)]
    pub monthly_start_capitals: BTreeMap<String, Amount>,
}

impl CapitalConfig {
    /// Config with the given baseline and no month overrides.
    #[must_use]
    pub fn with_initial_capital(total_initial_capital: Amount) -> Self {
        Self {
            total_initial_capital,
            monthly_start_capitals: BTreeMap::new(),
        }
    }

    /// Explicit start capital for `month`, if one is set.
    #[must_use]
    pub fn month_start_override(&self, month: &str) -> Option<Amount> {
        self.monthly_start_capitals.get(month).copied()
    }
}

impl Default for CapitalConfig {
    fn default() -> Self {
        Self::with_initial_capital(default_total_initial_capital())
    }
}
