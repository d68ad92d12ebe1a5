//! Record validation policy.
//!
//! Storage accepts any text. Whether a record is acceptable before it reaches
//! the database is decided here and nowhere else.

use thiserror::Error;

use crate::models::PersonRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("full name is empty")]
    EmptyName,
    #[error("birth date is empty")]
    EmptyBirthDate,
    #[error("phone number is empty")]
    EmptyPhone,
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),
}

pub trait RecordValidator {
    fn validate(&self, record: &PersonRecord) -> Result<(), ValidationError>;
}

/// Accepts every record. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Permissive;

impl RecordValidator for Permissive {
    fn validate(&self, _record: &PersonRecord) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Rejects blank fields and phone numbers with anything besides digits,
/// spaces and `+ - ( )`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl RecordValidator for Strict {
    fn validate(&self, record: &PersonRecord) -> Result<(), ValidationError> {
        if record.full_name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if record.birth_date.trim().is_empty() {
            return Err(ValidationError::EmptyBirthDate);
        }

        let phone = record.phone_number.trim();
        if phone.is_empty() {
            return Err(ValidationError::EmptyPhone);
        }
        if !is_valid_phone(phone) {
            return Err(ValidationError::InvalidPhone(record.phone_number.clone()));
        }
        Ok(())
    }
}

fn is_valid_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'));
    allowed && phone.chars().any(|c| c.is_ascii_digit())
}

/// Pick the policy for a command.
pub fn policy(strict: bool) -> Box<dyn RecordValidator> {
    if strict {
        Box::new(Strict)
    } else {
        Box::new(Permissive)
    }
}
