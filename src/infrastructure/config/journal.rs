//! Journal defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{CapitalConfig, DEFAULT_INITIAL_CAPITAL};

/// `[journal]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Baseline capital for a fresh or reset journal.
    pub default_initial_capital: Decimal,
}

impl JournalConfig {
    /// Capital configuration a fresh journal starts from.
    #[must_use]
    pub fn default_capital(&self) -> CapitalConfig {
        CapitalConfig::with_initial_capital(self.default_initial_capital)
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            default_initial_capital: Decimal::from(DEFAULT_INITIAL_CAPITAL),
        }
    }
}
