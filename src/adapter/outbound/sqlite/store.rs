//! SQLite blob store implementation.
//!
//! Keeps each journal document as one row of `journal_blobs`, replaced on
//! every save.

use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use tracing::warn;

use crate::adapter::outbound::sqlite::database::connection::{configure_sqlite_connection, DbPool};
use crate::adapter::outbound::sqlite::database::model::BlobRow;
use crate::adapter::outbound::sqlite::database::schema::journal_blobs;
use crate::error::{Error, Result};
use crate::port::outbound::BlobStore;

/// SQLite-backed [`BlobStore`].
pub struct SqliteBlobStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteBlobStore {
    /// Create a new blob store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;
        if let Err(e) = configure_sqlite_connection(&mut conn) {
            warn!(error = %e, "Failed to configure SQLite connection");
        }
        Ok(conn)
    }
}

impl BlobStore for SqliteBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn()?;
        let row: Option<BlobRow> = journal_blobs::table
            .find(key)
            .select(BlobRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(row.map(|row| row.value))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let row = BlobRow {
            key: key.to_string(),
            value: value.to_string(),
            updated_at: Utc::now().to_rfc3339(),
        };
        let mut conn = self.conn()?;
        diesel::replace_into(journal_blobs::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut conn = self.conn()?;
        diesel::delete(journal_blobs::table.find(key))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }
}
