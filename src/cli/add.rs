use anyhow::Result;

use crate::db::Database;
use crate::models::{NameId, PersonRecord};
use crate::validate::RecordValidator;

/// Execute the add command
pub fn run_add(
    db: &Database,
    record: PersonRecord,
    validator: &dyn RecordValidator,
) -> Result<NameId> {
    validator.validate(&record)?;

    let name_id = db.add_person(&record.full_name, &record.birth_date, &record.phone_number)?;

    println!(
        "Added: {} (born {}, phone {})",
        record.full_name, record.birth_date, record.phone_number
    );

    Ok(name_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Permissive, Strict, ValidationError};

    #[test]
    fn test_add_person_direct() {
        let db = Database::open_memory().unwrap();

        run_add(&db, PersonRecord::new("Артем", "22", "5555"), &Permissive).unwrap();

        let people = db.select_all().unwrap();
        assert_eq!(people, vec![PersonRecord::new("Артем", "22", "5555")]);
    }

    #[test]
    fn test_add_same_name_twice() {
        let db = Database::open_memory().unwrap();

        let first = run_add(&db, PersonRecord::new("Артем", "22", "5555"), &Permissive).unwrap();
        let second = run_add(&db, PersonRecord::new("Артем", "23", "6666"), &Permissive).unwrap();

        assert_eq!(first, second);
        assert_eq!(db.count_names().unwrap(), 1);
        assert_eq!(db.count_persons().unwrap(), 2);
    }

    #[test]
    fn test_permissive_stores_malformed_values() {
        let db = Database::open_memory().unwrap();

        run_add(&db, PersonRecord::new("Артем", "yesterday", "n/a"), &Permissive).unwrap();
        assert_eq!(db.select_by_phone("n/a").unwrap().len(), 1);
    }

    #[test]
    fn test_strict_rejects_before_storage() {
        let db = Database::open_memory().unwrap();

        let err = run_add(&db, PersonRecord::new("", "22", "5555"), &Strict).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::EmptyName)
        );
        assert_eq!(db.count_names().unwrap(), 0);
        assert_eq!(db.count_persons().unwrap(), 0);
    }
}
