use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

mod persons;
mod schema;

pub use schema::TABLES;

/// Handle to the people database. The connection lives as long as this value
/// and is closed when it is dropped, on success and error paths alike.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database file at `path`, creating it and any missing parent
    /// directories, then make sure the schema exists.
    pub fn open_at(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("could not create directory {}", parent.display())
                })?;
            }
        }

        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path)
            .with_context(|| format!("could not open database {}", path.display()))?;
        Self::from_connection(conn)
    }

    /// Open in-memory database for testing
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        let db = Self { conn };
        db.create_schema()?;
        Ok(db)
    }

    /// Create the `names` and `person` tables if they are missing. Existing
    /// tables and rows are left untouched, so this is safe to call repeatedly.
    pub fn create_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(schema::SCHEMA)
            .context("could not create schema")?;
        debug!("schema ready");
        Ok(())
    }
}
