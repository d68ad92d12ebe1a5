use anyhow::Result;

use super::display::print_people;
use crate::db::Database;

/// Execute the display command: every stored person.
pub fn run_display(db: &Database, json: bool) -> Result<()> {
    let people = db.select_all()?;
    print_people(&people, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty() {
        let db = Database::open_memory().unwrap();
        run_display(&db, false).unwrap();
    }

    #[test]
    fn test_display_rows() {
        let db = Database::open_memory().unwrap();
        db.add_person("Артем", "22", "5555").unwrap();
        db.add_person("Анна", "30", "7777").unwrap();

        run_display(&db, false).unwrap();
        run_display(&db, true).unwrap();
    }
}
