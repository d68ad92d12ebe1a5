/// Tables for the people store. Every statement is `IF NOT EXISTS`, so the
/// batch can run against an existing file on every startup.
///
/// `full_name` is deliberately not UNIQUE: de-duplication happens in
/// `Database::get_or_create_name`.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS names (
    name_id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS person (
    person_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name_id INTEGER NOT NULL,
    birth_date TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    FOREIGN KEY (name_id) REFERENCES names(name_id)
);

CREATE INDEX IF NOT EXISTS idx_names_full_name ON names(full_name);
CREATE INDEX IF NOT EXISTS idx_person_phone ON person(phone_number);
"#;

/// Table names the schema guarantees.
pub const TABLES: [&str; 2] = ["names", "person"];
