//! Journal entries: the raw, user-maintained daily records.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::DomainError;
use super::id::EntryId;
use super::money::Amount;
use crate::error::JournalError;

/// One recorded trading day.
///
/// Field names serialize in camelCase so stored blobs and backups stay
/// readable by every version of the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    /// Account balance at the close of `date`.
    pub final_capital: Amount,
    /// Manual start-of-day capital. Marks a deliberate capital reset and wins
    /// over the carried-forward balance for this day only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_capital: Option<Amount>,
    #[serde(default)]
    pub deposit: Amount,
    #[serde(default)]
    pub withdrawal: Amount,
    #[serde(default)]
    pub trade_count: u32,
    #[serde(default)]
    pub notes: String,
}

impl TradeEntry {
    /// Build an entry for `date` from user-supplied fields.
    #[must_use]
    pub fn new(id: EntryId, date: NaiveDate, fields: EntryFields) -> Self {
        Self {
            id,
            date,
            final_capital: fields.final_capital,
            initial_capital: None,
            deposit: fields.deposit,
            withdrawal: fields.withdrawal,
            trade_count: fields.trade_count,
            notes: fields.notes,
        }
    }

    /// Whether the entry carries a manual start-capital override.
    #[must_use]
    pub fn has_override(&self) -> bool {
        self.initial_capital.is_some()
    }

    /// Replace the mutable fields, keeping id, date and any override.
    pub fn apply(&mut self, fields: EntryFields) {
        self.final_capital = fields.final_capital;
        self.deposit = fields.deposit;
        self.withdrawal = fields.withdrawal;
        self.trade_count = fields.trade_count;
        self.notes = fields.notes;
    }

    /// The user-editable part of this entry.
    #[must_use]
    pub fn fields(&self) -> EntryFields {
        EntryFields {
            final_capital: self.final_capital,
            deposit: self.deposit,
            withdrawal: self.withdrawal,
            trade_count: self.trade_count,
            notes: self.notes.clone(),
        }
    }
}

/// The mutable fields of an entry as submitted by the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryFields {
    pub final_capital: Amount,
    pub deposit: Amount,
    pub withdrawal: Amount,
    pub trade_count: u32,
    pub notes: String,
}

impl EntryFields {
    /// Fields with only a closing balance set.
    #[must_use]
    pub fn closing(final_capital: Amount) -> Self {
        Self {
            final_capital,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_deposit(mut self, deposit: Amount) -> Self {
        self.deposit = deposit;
        self
    }

    #[must_use]
    pub fn with_withdrawal(mut self, withdrawal: Amount) -> Self {
        self.withdrawal = withdrawal;
        self
    }

    #[must_use]
    pub fn with_trades(mut self, trade_count: u32) -> Self {
        self.trade_count = trade_count;
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Reject negative balances and flows.
    ///
    /// # Errors
    /// Returns [`JournalError::NegativeAmount`] naming the first offending field.
    pub fn validate(&self) -> Result<(), JournalError> {
        for (field, value) in [
            ("final capital", self.final_capital),
            ("deposit", self.deposit),
            ("withdrawal", self.withdrawal),
        ] {
            if value < Decimal::ZERO {
                return Err(JournalError::NegativeAmount { field, value });
            }
        }
        Ok(())
    }
}

/// An entry as found in storage or in a backup file.
///
/// Every field is optional and amounts may be numbers or numeric strings;
/// [`RawEntry::normalize`] produces the strict [`TradeEntry`] the pipeline
/// works with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "loose_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub final_capital: Option<Amount>,
    #[serde(
        default,
        deserialize_with = "loose_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_capital: Option<Amount>,
    #[serde(
        default,
        deserialize_with = "loose_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub deposit: Option<Amount>,
    #[serde(
        default,
        deserialize_with = "loose_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub withdrawal: Option<Amount>,
    #[serde(
        default,
        deserialize_with = "loose_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub trade_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RawEntry {
    /// Turn a loose record into a canonical entry.
    ///
    /// `next_id` is only called when the record has no (or a blank) id.
    ///
    /// # Errors
    /// Returns a [`DomainError`] when the date is missing or malformed, or
    /// the final capital is missing.
    pub fn normalize(self, next_id: impl FnOnce() -> EntryId) -> Result<TradeEntry, DomainError> {
        let date_text = self.date.ok_or(DomainError::MissingDate)?;
        let date = NaiveDate::parse_from_str(date_text.trim(), "%Y-%m-%d").map_err(|_| {
            DomainError::InvalidDate {
                value: date_text.clone(),
            }
        })?;
        let final_capital = self
            .final_capital
            .ok_or_else(|| DomainError::MissingFinalCapital {
                date: date_text.clone(),
            })?;

        let id = match self.id {
            Some(id) if !id.trim().is_empty() => EntryId::new(id),
            _ => next_id(),
        };

        Ok(TradeEntry {
            id,
            date,
            final_capital,
            initial_capital: self.initial_capital,
            deposit: self.deposit.unwrap_or_default(),
            withdrawal: self.withdrawal.unwrap_or_default(),
            trade_count: self.trade_count.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
        })
    }
}

impl From<TradeEntry> for RawEntry {
    fn from(entry: TradeEntry) -> Self {
        Self {
            id: Some(entry.id.to_string()),
            date: Some(entry.date.format("%Y-%m-%d").to_string()),
            final_capital: Some(entry.final_capital),
            initial_capital: entry.initial_capital,
            deposit: Some(entry.deposit),
            withdrawal: Some(entry.withdrawal),
            trade_count: Some(entry.trade_count),
            notes: Some(entry.notes),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(Decimal),
    Text(String),
}

impl LooseNumber {
    fn into_decimal(self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(value),
            Self::Text(text) => Decimal::from_str(text.trim()).ok(),
        }
    }
}

fn loose_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LooseNumber>::deserialize(deserializer)?.and_then(LooseNumber::into_decimal))
}

fn loose_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use rust_decimal::prelude::ToPrimitive;

    Ok(Option::<LooseNumber>::deserialize(deserializer)?
        .and_then(LooseNumber::into_decimal)
        .and_then(|value| value.trunc().to_u32()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn normalize_fills_defaults_and_missing_id() {
        let raw: RawEntry =
            serde_json::from_str(r#"{"date":"2024-01-02","finalCapital":1100}"#).unwrap();

        let entry = raw.normalize(|| EntryId::new("fresh")).unwrap();

        assert_eq!(entry.id, EntryId::new("fresh"));
        assert_eq!(entry.date, date("2024-01-02"));
        assert_eq!(entry.final_capital, dec!(1100));
        assert_eq!(entry.deposit, Decimal::ZERO);
        assert_eq!(entry.withdrawal, Decimal::ZERO);
        assert_eq!(entry.trade_count, 0);
        assert!(entry.notes.is_empty());
        assert!(entry.initial_capital.is_none());
    }

    #[test]
    fn normalize_keeps_existing_id() {
        let raw = RawEntry {
            id: Some("kept".into()),
            date: Some("2024-03-04".into()),
            final_capital: Some(dec!(5)),
            ..RawEntry::default()
        };

        let entry = raw.normalize(|| panic!("id generator must not run")).unwrap();
        assert_eq!(entry.id.as_str(), "kept");
    }

    #[test]
    fn normalize_replaces_blank_id() {
        let raw = RawEntry {
            id: Some("  ".into()),
            date: Some("2024-03-04".into()),
            final_capital: Some(dec!(5)),
            ..RawEntry::default()
        };

        let entry = raw.normalize(|| EntryId::new("new")).unwrap();
        assert_eq!(entry.id.as_str(), "new");
    }

    #[test]
    fn normalize_rejects_bad_date() {
        let raw = RawEntry {
            date: Some("04/03/2024".into()),
            final_capital: Some(dec!(5)),
            ..RawEntry::default()
        };

        let err = raw.normalize(|| EntryId::new("x")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDate { .. }));
    }

    #[test]
    fn normalize_rejects_missing_final_capital() {
        let raw = RawEntry {
            date: Some("2024-03-04".into()),
            ..RawEntry::default()
        };

        let err = raw.normalize(|| EntryId::new("x")).unwrap_err();
        assert!(matches!(err, DomainError::MissingFinalCapital { .. }));
    }

    #[test]
    fn loose_amounts_accept_strings_and_nulls() {
        let raw: RawEntry = serde_json::from_str(
            r#"{"date":"2024-01-02","finalCapital":"1250.50","deposit":null,"withdrawal":"","tradeCount":3}"#,
        )
        .unwrap();

        assert_eq!(raw.final_capital, Some(dec!(1250.50)));
        assert_eq!(raw.deposit, None);
        assert_eq!(raw.withdrawal, None);
        assert_eq!(raw.trade_count, Some(3));
    }

    #[test]
    fn override_is_preserved_through_normalization() {
        let raw: RawEntry = serde_json::from_str(
            r#"{"id":"a","date":"2024-01-02","finalCapital":900,"initialCapital":800}"#,
        )
        .unwrap();

        let entry = raw.normalize(|| EntryId::new("x")).unwrap();
        assert!(entry.has_override());
        assert_eq!(entry.initial_capital, Some(dec!(800)));
    }

    #[test]
    fn validate_rejects_negative_flows() {
        let fields = EntryFields::closing(dec!(100)).with_withdrawal(dec!(-5));
        assert_eq!(
            fields.validate(),
            Err(JournalError::NegativeAmount {
                field: "withdrawal",
                value: dec!(-5),
            })
        );
    }

    #[test]
    fn apply_keeps_identity_and_override() {
        let mut entry = TradeEntry::new(
            EntryId::new("a"),
            date("2024-01-02"),
            EntryFields::closing(dec!(100)),
        );
        entry.initial_capital = Some(dec!(90));

        entry.apply(EntryFields::closing(dec!(120)).with_trades(4).with_notes("late fill"));

        assert_eq!(entry.id.as_str(), "a");
        assert_eq!(entry.initial_capital, Some(dec!(90)));
        assert_eq!(entry.final_capital, dec!(120));
        assert_eq!(entry.trade_count, 4);
        assert_eq!(entry.notes, "late fill");
    }
}
