//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::journal_blobs;

/// Database row for one named JSON document.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = journal_blobs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BlobRow {
    pub key: String,
    pub value: String,
    /// RFC 3339 timestamp of the last write.
    pub updated_at: String,
}
