use anyhow::Result;
use rusqlite::types::{Type, ValueRef};
use rusqlite::{params, OptionalExtension, Row};
use tracing::{debug, info};

use super::Database;
use crate::models::{NameId, PersonRecord};

const SELECT_JOINED: &str = r#"SELECT names.full_name, person.birth_date, person.phone_number
    FROM person
    INNER JOIN names ON names.name_id = person.name_id"#;

impl Database {
    // ==================== NAMES ====================

    /// Find the id of the name whose text matches `full_name` exactly.
    /// If duplicates exist the oldest one wins.
    pub fn find_name_id(&self, full_name: &str) -> Result<Option<NameId>> {
        let id = self
            .conn
            .query_row(
                "SELECT name_id FROM names WHERE full_name = ? ORDER BY name_id LIMIT 1",
                [full_name],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(id.map(NameId))
    }

    /// Get or create a name row by its text
    pub fn get_or_create_name(&self, full_name: &str) -> Result<NameId> {
        if let Some(id) = self.find_name_id(full_name)? {
            return Ok(id);
        }

        self.conn
            .execute("INSERT INTO names (full_name) VALUES (?)", [full_name])?;
        let id = NameId(self.conn.last_insert_rowid());
        debug!(name_id = %id, "created name");
        Ok(id)
    }

    pub fn count_names(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM names", [], |row| row.get(0))?;
        Ok(count)
    }

    // ==================== PERSON CREATE ====================

    /// Store one person. The name is looked up (or created) and the person
    /// row inserted in a single transaction, committed before returning.
    /// Birth date and phone number are stored as given.
    pub fn add_person(
        &self,
        full_name: &str,
        birth_date: &str,
        phone_number: &str,
    ) -> Result<NameId> {
        // Dropping `tx` without commit rolls back.
        let tx = self.conn.unchecked_transaction()?;

        let name_id = self.get_or_create_name(full_name)?;
        self.conn.execute(
            "INSERT INTO person (name_id, birth_date, phone_number) VALUES (?, ?, ?)",
            params![name_id.0, birth_date, phone_number],
        )?;

        tx.commit()?;
        info!(name_id = %name_id, "added person");
        Ok(name_id)
    }

    // ==================== PERSON READ ====================

    /// Every person joined with its name, in storage order.
    pub fn select_all(&self) -> Result<Vec<PersonRecord>> {
        let mut stmt = self.conn.prepare(SELECT_JOINED)?;

        let people = stmt
            .query_map([], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(rows = people.len(), "selected all people");
        Ok(people)
    }

    /// People whose phone number equals `phone_number` exactly. No match is
    /// an empty result, not an error.
    pub fn select_by_phone(&self, phone_number: &str) -> Result<Vec<PersonRecord>> {
        let sql = format!("{} WHERE person.phone_number = ?", SELECT_JOINED);
        let mut stmt = self.conn.prepare(&sql)?;

        let people = stmt
            .query_map([phone_number], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        debug!(rows = people.len(), "selected people by phone");
        Ok(people)
    }

    pub fn count_persons(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM person", [], |row| row.get(0))?;
        Ok(count)
    }

    fn row_to_record(row: &Row) -> rusqlite::Result<PersonRecord> {
        Ok(PersonRecord {
            full_name: column_text(row, 0)?,
            birth_date: column_text(row, 1)?,
            phone_number: column_text(row, 2)?,
        })
    }
}

/// Read a column as text. Files written by older tools keep birth dates and
/// phone numbers in INTEGER columns, so numbers are rendered in decimal.
fn column_text(row: &Row, idx: usize) -> rusqlite::Result<String> {
    match row.get_ref(idx)? {
        ValueRef::Text(t) => Ok(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Integer(i) => Ok(i.to_string()),
        ValueRef::Real(f) => Ok(f.to_string()),
        ValueRef::Null => Ok(String::new()),
        ValueRef::Blob(_) => Err(rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Blob,
            "expected text or number".into(),
        )),
    }
}
