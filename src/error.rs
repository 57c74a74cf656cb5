use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::EntryId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Entry store errors. The store is left unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JournalError {
    #[error("no entry with id {0}")]
    EntryNotFound(EntryId),

    #[error("{field} must not be negative, got {value}")]
    NegativeAmount {
        field: &'static str,
        value: rust_decimal::Decimal,
    },

    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),

    #[error("no entry recorded for {0}")]
    NoEntryForDate(NaiveDate),

    #[error("nothing is waiting for confirmation")]
    NoPendingChange,
}

/// Validation errors raised while reading a backup payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("the file is damaged or is not a valid journal backup: {0}")]
    Malformed(String),

    #[error("the file does not contain a valid entry history: 'entries' must be a list")]
    MissingEntries,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Journal(#[from] JournalError),

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} needs confirmation; re-run with --yes")]
    ConfirmationRequired(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("database error: {0}")]
    Database(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}
