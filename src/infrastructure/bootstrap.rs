//! Composition root: wires storage and id generation into a [`Journal`].

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::sqlite::database::connection::open_database;
use crate::adapter::outbound::{SqliteBlobStore, UuidIds};
use crate::application::Journal;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Open the journal stored at `database`, creating it if needed.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn open_journal(config: &Config, database: &Path) -> Result<Journal> {
    let pool = open_database(database)?;
    let journal = Journal::open(
        Arc::new(SqliteBlobStore::new(pool)),
        Arc::new(UuidIds),
        config.journal.default_capital(),
    );
    info!(
        path = %database.display(),
        entries = journal.entries().len(),
        "Journal opened"
    );
    Ok(journal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntryFields;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    #[test]
    fn journal_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.db");
        let config = Config::default();

        let mut journal = open_journal(&config, &path).unwrap();
        journal
            .add(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                EntryFields::closing(dec!(1100)),
            )
            .unwrap();

        let reopened = open_journal(&config, &path).unwrap();
        assert_eq!(reopened.entries().len(), 1);
        assert_eq!(reopened.entries()[0].final_capital, dec!(1100));
    }

    #[test]
    fn fresh_journal_uses_configured_baseline() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.journal.default_initial_capital = dec!(5000);

        let journal = open_journal(&config, &dir.path().join("journal.db")).unwrap();

        assert_eq!(journal.config().total_initial_capital, dec!(5000));
    }
}
