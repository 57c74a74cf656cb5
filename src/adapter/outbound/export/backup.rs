//! JSON backup of the raw journal.

use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::{CapitalConfig, RawEntry, TradeEntry};
use crate::error::{ImportError, Result};

/// Format version written into every backup.
pub const BACKUP_VERSION: &str = "1.0";

#[derive(Serialize)]
struct BackupDocument<'a> {
    version: &'a str,
    timestamp: String,
    entries: &'a [TradeEntry],
    config: &'a CapitalConfig,
}

/// Render the entries and configuration as a pretty-printed backup.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_backup_json(entries: &[TradeEntry], config: &CapitalConfig) -> Result<String> {
    let document = BackupDocument {
        version: BACKUP_VERSION,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        entries,
        config,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// A backup read back from disk, not yet applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBackup {
    pub version: Option<String>,
    pub timestamp: Option<String>,
    pub entries: Vec<RawEntry>,
    /// `None` when the backup carries no configuration.
    pub config: Option<CapitalConfig>,
}

impl ParsedBackup {
    /// Earliest and latest readable entry dates.
    #[must_use]
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self
            .entries
            .iter()
            .filter_map(|entry| entry.date.as_deref())
            .filter_map(|date| NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok());
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), date| (lo.min(date), hi.max(date))))
    }
}

/// Parse and validate a backup file.
///
/// # Errors
/// Returns [`ImportError::Malformed`] for unreadable JSON, entries or
/// configuration, and [`ImportError::MissingEntries`] when `entries` is
/// absent or not a list.
pub fn parse_backup(text: &str) -> std::result::Result<ParsedBackup, ImportError> {
    let document: Value =
        serde_json::from_str(text).map_err(|e| ImportError::Malformed(e.to_string()))?;

    let entries = match document.get("entries") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                serde_json::from_value::<RawEntry>(item.clone())
                    .map_err(|e| ImportError::Malformed(format!("entry: {e}")))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?,
        _ => return Err(ImportError::MissingEntries),
    };

    let config = match document.get("config") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            serde_json::from_value(value.clone())
                .map_err(|e| ImportError::Malformed(format!("config: {e}")))?,
        ),
    };

    let text_field = |name: &str| document.get(name).and_then(Value::as_str).map(str::to_string);

    Ok(ParsedBackup {
        version: text_field("version"),
        timestamp: text_field("timestamp"),
        entries,
        config,
    })
}
