//! Entry store: the user-maintained entry list and capital configuration.
//!
//! Mutations that could silently lose data (overwriting a day, moving an
//! entry onto an occupied date, deleting) are staged as a [`PendingChange`]
//! and only applied by [`Journal::confirm_pending`]. Every applied mutation
//! is persisted immediately; persistence is best-effort and never rolls the
//! in-memory state back.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::domain::period::parse_month_key;
use crate::domain::{Amount, CapitalConfig, EntryFields, EntryId, RawEntry, TradeEntry};
use crate::error::JournalError;
use crate::port::outbound::storage::{CONFIG_KEY, ENTRIES_KEY};
use crate::port::outbound::{BlobStore, IdGenerator};

use super::snapshot::Snapshot;

/// Result of [`Journal::add`].
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// No entry existed for the date; a new one was appended.
    Created(EntryId),
    /// The existing entry carried a manual start capital and took the new
    /// fields without confirmation.
    Merged(EntryId),
    /// The date is taken. An overwrite is staged and waits for confirmation.
    Conflict { existing: TradeEntry },
}

/// Result of [`Journal::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    Updated(EntryId),
    /// Another entry occupies the target date. Replacing it is staged and
    /// waits for confirmation.
    Collision { occupant: TradeEntry },
}

/// A change held back until the user confirms it.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    /// Replace the fields of the entry recorded for `date`.
    Overwrite { date: NaiveDate, fields: EntryFields },
    /// Move entry `id` to `date`, removing `displaced`.
    Replace {
        id: EntryId,
        date: NaiveDate,
        fields: EntryFields,
        displaced: EntryId,
    },
    /// Remove entry `id`.
    Delete { id: EntryId },
}

/// Counts reported by [`Journal::import`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    /// Records without a usable date or final capital.
    pub dropped: usize,
    /// Records that were missing an id and received a fresh one.
    pub assigned_ids: usize,
}

/// The journal: entries, capital configuration and the staging slot.
pub struct Journal {
    entries: Vec<TradeEntry>,
    config: CapitalConfig,
    default_config: CapitalConfig,
    pending: Option<PendingChange>,
    store: Arc<dyn BlobStore>,
    ids: Arc<dyn IdGenerator>,
}

impl Journal {
    /// Load the journal from `store`.
    ///
    /// Missing or corrupt blobs fall back to an empty entry list and
    /// `default_config`; the failure is logged, never returned. Records are
    /// decoded one at a time, so an unreadable record is dropped on its own.
    /// Entries without an id get one and are written back.
    pub fn open(
        store: Arc<dyn BlobStore>,
        ids: Arc<dyn IdGenerator>,
        default_config: CapitalConfig,
    ) -> Self {
        let stored: Vec<serde_json::Value> =
            load_blob(store.as_ref(), ENTRIES_KEY).unwrap_or_default();
        let (raw, undecodable) = decode_records(stored);
        let config: CapitalConfig =
            load_blob(store.as_ref(), CONFIG_KEY).unwrap_or_else(|| default_config.clone());

        let mut journal = Self {
            entries: Vec::new(),
            config,
            default_config,
            pending: None,
            store,
            ids,
        };

        let mut summary = journal.absorb(raw);
        summary.dropped += undecodable;
        if summary.assigned_ids > 0 {
            info!(count = summary.assigned_ids, "Assigned ids to legacy entries");
            journal.save_entries();
        }
        debug!(
            entries = journal.entries.len(),
            dropped = summary.dropped,
            "Journal loaded"
        );
        journal
    }

    /// All entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[TradeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn config(&self) -> &CapitalConfig {
        &self.config
    }

    /// The change waiting for confirmation, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingChange> {
        self.pending.as_ref()
    }

    #[must_use]
    pub fn entry(&self, id: &EntryId) -> Option<&TradeEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    #[must_use]
    pub fn entry_on(&self, date: NaiveDate) -> Option<&TradeEntry> {
        self.entries.iter().find(|entry| entry.date == date)
    }

    /// Run the full derivation pipeline over the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let snapshot = Snapshot::build(&self.entries, &self.config);
        debug!(
            entries = self.entries.len(),
            days = snapshot.days.len(),
            "Pipeline run"
        );
        snapshot
    }

    /// Record `fields` for `date`.
    ///
    /// # Errors
    /// Returns [`JournalError::NegativeAmount`] for negative amounts; the
    /// journal is unchanged.
    pub fn add(&mut self, date: NaiveDate, fields: EntryFields) -> Result<AddOutcome, JournalError> {
        fields.validate()?;

        let Some(index) = self.entries.iter().position(|entry| entry.date == date) else {
            let id = self.ids.next_id();
            self.entries.push(TradeEntry::new(id.clone(), date, fields));
            info!(date = %date, id = %id, outcome = "created", "Entry added");
            self.save_entries();
            return Ok(AddOutcome::Created(id));
        };

        let existing = &mut self.entries[index];
        if existing.has_override() {
            existing.apply(fields);
            let id = existing.id.clone();
            info!(date = %date, id = %id, outcome = "merged", "Entry merged");
            self.save_entries();
            return Ok(AddOutcome::Merged(id));
        }

        let existing = existing.clone();
        info!(date = %date, id = %existing.id, outcome = "conflict", "Entry awaits overwrite confirmation");
        self.pending = Some(PendingChange::Overwrite { date, fields });
        Ok(AddOutcome::Conflict { existing })
    }

    /// Replace the mutable fields of the entry on `date`, keeping its id and
    /// any manual start capital.
    ///
    /// # Errors
    /// Returns [`JournalError::NoEntryForDate`] when nothing is recorded for
    /// `date`, or [`JournalError::NegativeAmount`] for negative amounts.
    pub fn confirm_overwrite(
        &mut self,
        date: NaiveDate,
        fields: EntryFields,
    ) -> Result<EntryId, JournalError> {
        fields.validate()?;
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.date == date)
            .ok_or(JournalError::NoEntryForDate(date))?;
        entry.apply(fields);
        let id = entry.id.clone();
        info!(date = %date, id = %id, outcome = "overwritten", "Entry overwritten");
        self.save_entries();
        Ok(id)
    }

    /// Edit entry `id`, possibly moving it to another date.
    ///
    /// # Errors
    /// Returns [`JournalError::EntryNotFound`] for an unknown id or
    /// [`JournalError::NegativeAmount`] for negative amounts.
    pub fn update(
        &mut self,
        id: &EntryId,
        date: NaiveDate,
        fields: EntryFields,
    ) -> Result<UpdateOutcome, JournalError> {
        fields.validate()?;
        let index = self.index_of(id)?;

        if let Some(occupant) = self
            .entries
            .iter()
            .find(|entry| entry.date == date && &entry.id != id)
        {
            let occupant = occupant.clone();
            info!(date = %date, id = %id, displaced = %occupant.id, outcome = "collision", "Edit awaits replace confirmation");
            self.pending = Some(PendingChange::Replace {
                id: id.clone(),
                date,
                fields,
                displaced: occupant.id.clone(),
            });
            return Ok(UpdateOutcome::Collision { occupant });
        }

        let entry = &mut self.entries[index];
        entry.date = date;
        entry.apply(fields);
        info!(date = %date, id = %id, outcome = "updated", "Entry updated");
        self.save_entries();
        Ok(UpdateOutcome::Updated(id.clone()))
    }

    /// Stage the removal of entry `id`.
    ///
    /// # Errors
    /// Returns [`JournalError::EntryNotFound`] for an unknown id.
    pub fn request_delete(&mut self, id: &EntryId) -> Result<&TradeEntry, JournalError> {
        let index = self.index_of(id)?;
        self.pending = Some(PendingChange::Delete { id: id.clone() });
        Ok(&self.entries[index])
    }

    /// Apply the staged change and clear the staging slot.
    ///
    /// # Errors
    /// Returns [`JournalError::NoPendingChange`] when nothing is staged, or the
    /// error of the staged operation if its target has disappeared meanwhile.
    pub fn confirm_pending(&mut self) -> Result<PendingChange, JournalError> {
        let change = self.pending.take().ok_or(JournalError::NoPendingChange)?;
        match &change {
            PendingChange::Overwrite { date, fields } => {
                self.confirm_overwrite(*date, fields.clone())?;
            }
            PendingChange::Replace {
                id,
                date,
                fields,
                displaced,
            } => {
                self.index_of(id)?;
                self.entries.retain(|entry| &entry.id != displaced);
                let index = self.index_of(id)?;
                let entry = &mut self.entries[index];
                entry.date = *date;
                entry.apply(fields.clone());
                info!(date = %date, id = %id, displaced = %displaced, outcome = "replaced", "Entry replaced");
                self.save_entries();
            }
            PendingChange::Delete { id } => {
                let index = self.index_of(id)?;
                let removed = self.entries.remove(index);
                info!(date = %removed.date, id = %id, outcome = "deleted", "Entry deleted");
                self.save_entries();
            }
        }
        Ok(change)
    }

    /// Drop the staged change without applying it.
    pub fn discard_pending(&mut self) -> Option<PendingChange> {
        let change = self.pending.take();
        if change.is_some() {
            debug!("Pending change discarded");
        }
        change
    }

    /// Replace the whole journal with imported records and configuration.
    ///
    /// Records missing an id get a fresh one; records without a usable date
    /// or final capital are dropped. Nothing is merged with the current
    /// entries.
    pub fn import(&mut self, records: Vec<RawEntry>, config: CapitalConfig) -> ImportSummary {
        self.entries.clear();
        self.pending = None;
        self.config = config;
        let summary = self.absorb(records);
        info!(
            imported = summary.imported,
            dropped = summary.dropped,
            assigned_ids = summary.assigned_ids,
            "Journal imported"
        );
        self.save_entries();
        self.save_config();
        summary
    }

    /// Clear every entry and restore the default configuration.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.pending = None;
        self.config = self.default_config.clone();
        for key in [ENTRIES_KEY, CONFIG_KEY] {
            if let Err(e) = self.store.remove(key) {
                error!(key, error = %e, "Failed to remove stored journal data");
            }
        }
        warn!("Journal reset to defaults");
    }

    /// Set the capital held before the first entry.
    ///
    /// # Errors
    /// Returns [`JournalError::NegativeAmount`] for a negative amount.
    pub fn set_initial_capital(&mut self, amount: Amount) -> Result<(), JournalError> {
        non_negative("initial capital", amount)?;
        self.config.total_initial_capital = amount;
        info!(amount = %amount, "Initial capital set");
        self.save_config();
        Ok(())
    }

    /// Pin the start capital of `month` (`YYYY-MM`).
    ///
    /// # Errors
    /// Returns [`JournalError::InvalidMonth`] for a malformed month or
    /// [`JournalError::NegativeAmount`] for a negative amount.
    pub fn set_month_start(&mut self, month: &str, amount: Amount) -> Result<(), JournalError> {
        let month = month_key(month)?;
        non_negative("month start capital", amount)?;
        info!(month = %month, amount = %amount, "Month start capital set");
        self.config.monthly_start_capitals.insert(month, amount);
        self.save_config();
        Ok(())
    }

    /// Remove the pinned start capital of `month`, returning it.
    ///
    /// # Errors
    /// Returns [`JournalError::InvalidMonth`] for a malformed month.
    pub fn clear_month_start(&mut self, month: &str) -> Result<Option<Amount>, JournalError> {
        let month = month_key(month)?;
        let removed = self.config.monthly_start_capitals.remove(&month);
        if removed.is_some() {
            info!(month = %month, "Month start capital cleared");
            self.save_config();
        }
        Ok(removed)
    }

    fn index_of(&self, id: &EntryId) -> Result<usize, JournalError> {
        self.entries
            .iter()
            .position(|entry| &entry.id == id)
            .ok_or_else(|| JournalError::EntryNotFound(id.clone()))
    }

    /// Normalize loose records into the entry list.
    fn absorb(&mut self, records: Vec<RawEntry>) -> ImportSummary {
        let mut summary = ImportSummary {
            imported: 0,
            dropped: 0,
            assigned_ids: 0,
        };
        let ids = Arc::clone(&self.ids);

        for record in records {
            let mut assigned = false;
            let normalized = record.normalize(|| {
                assigned = true;
                ids.next_id()
            });
            match normalized {
                Ok(entry) => {
                    summary.imported += 1;
                    summary.assigned_ids += usize::from(assigned);
                    self.entries.push(entry);
                }
                Err(e) => {
                    summary.dropped += 1;
                    warn!(error = %e, "Dropping unreadable entry");
                }
            }
        }
        summary
    }

    fn save_entries(&self) {
        self.save(ENTRIES_KEY, &self.entries);
    }

    fn save_config(&self) {
        self.save(CONFIG_KEY, &self.config);
    }

    fn save<T: serde::Serialize>(&self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(crate::error::Error::from)
            .and_then(|json| self.store.save(key, &json));
        if let Err(e) = result {
            error!(key, error = %e, "Failed to persist journal data");
        }
    }
}

/// Decode each stored record independently, counting the ones that fail.
fn decode_records(values: Vec<serde_json::Value>) -> (Vec<RawEntry>, usize) {
    let mut dropped = 0;
    let records = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<RawEntry>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                dropped += 1;
                warn!(error = %e, "Dropping unreadable entry");
                None
            }
        })
        .collect();
    (records, dropped)
}

fn load_blob<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> Option<T> {
    let text = match store.load(key) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored journal data, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored journal data is corrupt, using defaults");
            None
        }
    }
}

fn month_key(month: &str) -> Result<String, JournalError> {
    parse_month_key(month)
        .map(|_| month.trim().to_string())
        .ok_or_else(|| JournalError::InvalidMonth(month.to_string()))
}

fn non_negative(field: &'static str, value: Amount) -> Result<(), JournalError> {
    if value < Amount::ZERO {
        return Err(JournalError::NegativeAmount { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{MemoryBlobStore, SequentialIds};
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn journal_with(store: Arc<MemoryBlobStore>) -> Journal {
        Journal::open(store, Arc::new(SequentialIds::default()), CapitalConfig::default())
    }

    fn empty_journal() -> (Journal, Arc<MemoryBlobStore>) {
        let store = Arc::new(MemoryBlobStore::default());
        (journal_with(Arc::clone(&store)), store)
    }

    #[test]
    fn add_creates_entry_and_persists() {
        let (mut journal, store) = empty_journal();

        let outcome = journal
            .add(date("2024-01-02"), EntryFields::closing(dec!(1100)))
            .unwrap();

        assert!(matches!(outcome, AddOutcome::Created(_)));
        assert_eq!(journal.entries().len(), 1);
        assert!(store.get(ENTRIES_KEY).unwrap().contains("\"finalCapital\":1100"));
    }

    #[test]
    fn add_on_taken_date_stages_overwrite() {
        let (mut journal, _) = empty_journal();
        journal
            .add(date("2024-01-02"), EntryFields::closing(dec!(1100)))
            .unwrap();

        let outcome = journal
            .add(date("2024-01-02"), EntryFields::closing(dec!(900)))
            .unwrap();

        assert!(matches!(outcome, AddOutcome::Conflict { .. }));
        assert_eq!(journal.entries().len(), 1);
        assert_eq!(journal.entries()[0].final_capital, dec!(1100));
        assert!(matches!(
            journal.pending(),
            Some(PendingChange::Overwrite { .. })
        ));

        journal.confirm_pending().unwrap();

        assert_eq!(journal.entries().len(), 1);
        assert_eq!(journal.entries()[0].final_capital, dec!(900));
        assert!(journal.pending().is_none());
    }

    #[test]
    fn discarded_conflict_leaves_entry_untouched() {
        let (mut journal, _) = empty_journal();
        journal
            .add(date("2024-01-02"), EntryFields::closing(dec!(1100)))
            .unwrap();
        journal
            .add(date("2024-01-02"), EntryFields::closing(dec!(900)))
            .unwrap();

        assert!(journal.discard_pending().is_some());

        assert_eq!(journal.entries()[0].final_capital, dec!(1100));
        assert_eq!(journal.confirm_pending(), Err(JournalError::NoPendingChange));
    }

    #[test]
    fn add_merges_into_entry_with_override() {
        let store = Arc::new(MemoryBlobStore::default());
        store.put(
            ENTRIES_KEY,
            r#"[{"id":"x","date":"2024-01-02","finalCapital":500,"initialCapital":500}]"#,
        );
        let mut journal = journal_with(store);

        let outcome = journal
            .add(
                date("2024-01-02"),
                EntryFields::closing(dec!(550)).with_notes("after reset"),
            )
            .unwrap();

        assert_eq!(outcome, AddOutcome::Merged(EntryId::new("x")));
        let entry = &journal.entries()[0];
        assert_eq!(entry.final_capital, dec!(550));
        assert_eq!(entry.initial_capital, Some(dec!(500)));
        assert_eq!(entry.notes, "after reset");
        assert!(journal.pending().is_none());
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let (mut journal, _) = empty_journal();

        let err = journal
            .add(
                date("2024-01-02"),
                EntryFields::closing(dec!(100)).with_deposit(dec!(-1)),
            )
            .unwrap_err();

        assert!(matches!(err, JournalError::NegativeAmount { field: "deposit", .. }));
        assert!(journal.entries().is_empty());
    }

    #[test]
    fn update_in_place_and_collision() {
        let (mut journal, _) = empty_journal();
        let AddOutcome::Created(a) = journal
            .add(date("2024-01-02"), EntryFields::closing(dec!(1100)))
            .unwrap()
        else {
            panic!("expected a new entry");
        };
        let AddOutcome::Created(b) = journal
            .add(date("2024-01-03"), EntryFields::closing(dec!(1200)))
            .unwrap()
        else {
            panic!("expected a new entry");
        };

        let moved = journal
            .update(&a, date("2024-01-01"), EntryFields::closing(dec!(1050)))
            .unwrap();
        assert_eq!(moved, UpdateOutcome::Updated(a.clone()));
        assert_eq!(journal.entry(&a).unwrap().date, date("2024-01-01"));

        let outcome = journal
            .update(&a, date("2024-01-03"), EntryFields::closing(dec!(1300)))
            .unwrap();
        assert!(matches!(outcome, UpdateOutcome::Collision { ref occupant } if occupant.id == b));
        assert_eq!(journal.entries().len(), 2);

        journal.confirm_pending().unwrap();

        assert_eq!(journal.entries().len(), 1);
        let entry = journal.entry(&a).unwrap();
        assert_eq!(entry.date, date("2024-01-03"));
        assert_eq!(entry.final_capital, dec!(1300));
        assert!(journal.entry(&b).is_none());
    }

    #[test]
    fn update_unknown_id_fails() {
        let (mut journal, _) = empty_journal();

        let err = journal
            .update(
                &EntryId::new("missing"),
                date("2024-01-02"),
                EntryFields::closing(dec!(1)),
            )
            .unwrap_err();

        assert_eq!(err, JournalError::EntryNotFound(EntryId::new("missing")));
    }

    #[test]
    fn delete_requires_confirmation() {
        let (mut journal, _) = empty_journal();
        let AddOutcome::Created(id) = journal
            .add(date("2024-01-02"), EntryFields::closing(dec!(1100)))
            .unwrap()
        else {
            panic!("expected a new entry");
        };

        journal.request_delete(&id).unwrap();
        assert_eq!(journal.entries().len(), 1);

        let applied = journal.confirm_pending().unwrap();
        assert_eq!(applied, PendingChange::Delete { id });
        assert!(journal.entries().is_empty());
    }

    #[test]
    fn corrupt_blobs_fall_back_to_defaults() {
        let store = Arc::new(MemoryBlobStore::default());
        store.put(ENTRIES_KEY, "{not json");
        store.put(CONFIG_KEY, "totally broken");

        let journal = journal_with(store);

        assert!(journal.entries().is_empty());
        assert_eq!(journal.config(), &CapitalConfig::default());
    }

    #[test]
    fn legacy_entries_get_ids_on_load() {
        let store = Arc::new(MemoryBlobStore::default());
        store.put(
            ENTRIES_KEY,
            r#"[{"date":"2024-01-02","finalCapital":"1100"},{"date":"bad","finalCapital":1}]"#,
        );

        let journal = journal_with(Arc::clone(&store));

        assert_eq!(journal.entries().len(), 1);
        assert_eq!(journal.entries()[0].id.as_str(), "entry-1");
        assert!(store.get(ENTRIES_KEY).unwrap().contains("entry-1"));
    }

    #[test]
    fn import_replaces_everything() {
        let (mut journal, _) = empty_journal();
        journal
            .add(date("2023-12-29"), EntryFields::closing(dec!(1)))
            .unwrap();
        let records: Vec<RawEntry> = serde_json::from_str(
            r#"[{"id":"keep","date":"2024-01-02","finalCapital":1100},{"date":"2024-01-03","finalCapital":1200},{"finalCapital":5}]"#,
        )
        .unwrap();

        let summary = journal.import(records, CapitalConfig::with_initial_capital(dec!(2000)));

        assert_eq!(
            summary,
            ImportSummary {
                imported: 2,
                dropped: 1,
                assigned_ids: 1,
            }
        );
        assert_eq!(journal.entries().len(), 2);
        assert!(journal.entry_on(date("2023-12-29")).is_none());
        assert_eq!(journal.config().total_initial_capital, dec!(2000));
    }

    #[test]
    fn reset_restores_defaults_and_clears_storage() {
        let (mut journal, store) = empty_journal();
        journal
            .add(date("2024-01-02"), EntryFields::closing(dec!(1100)))
            .unwrap();
        journal.set_initial_capital(dec!(5000)).unwrap();

        journal.reset();

        assert!(journal.entries().is_empty());
        assert_eq!(journal.config(), &CapitalConfig::default());
        assert!(store.get(ENTRIES_KEY).is_none());
        assert!(store.get(CONFIG_KEY).is_none());
    }

    #[test]
    fn month_start_overrides() {
        let (mut journal, _) = empty_journal();

        journal.set_month_start("2024-02", dec!(1500)).unwrap();
        assert_eq!(journal.config().month_start_override("2024-02"), Some(dec!(1500)));

        assert_eq!(
            journal.set_month_start("Feb 2024", dec!(1)),
            Err(JournalError::InvalidMonth("Feb 2024".into()))
        );
        assert_eq!(journal.clear_month_start("2024-02"), Ok(Some(dec!(1500))));
        assert_eq!(journal.clear_month_start("2024-02"), Ok(None));
    }

    #[test]
    fn failed_save_keeps_state() {
        let store = Arc::new(MemoryBlobStore::failing());
        let mut journal = journal_with(store);

        journal
            .add(date("2024-01-02"), EntryFields::closing(dec!(1100)))
            .unwrap();

        assert_eq!(journal.entries().len(), 1);
    }
}
