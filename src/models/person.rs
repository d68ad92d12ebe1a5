use serde::{Deserialize, Serialize};
use std::fmt;

/// Surrogate key of a row in the `names` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameId(pub i64);

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person row joined with its name: what `add` stores and what the
/// readers return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub full_name: String,
    pub birth_date: String,
    pub phone_number: String,
}

impl PersonRecord {
    pub fn new(
        full_name: impl Into<String>,
        birth_date: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            birth_date: birth_date.into(),
            phone_number: phone_number.into(),
        }
    }
}
