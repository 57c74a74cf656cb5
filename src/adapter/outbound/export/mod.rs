//! File formats for moving journal data in and out.
//!
//! - [`backup`]: full JSON backup (entries plus capital configuration)
//! - [`csv`]: spreadsheet export of the calculated series
//! - [`notes`]: plain-text notes journal

pub mod backup;
pub mod csv;
pub mod notes;

pub use backup::{parse_backup, to_backup_json, ParsedBackup, BACKUP_VERSION};
pub use notes::notes_report;
pub use self::csv::write_days;
