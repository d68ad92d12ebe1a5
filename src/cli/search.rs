use anyhow::Result;

use super::display::print_people;
use crate::db::Database;

/// Execute the select command: people with exactly this phone number.
pub fn run_select(db: &Database, phone_number: &str, json: bool) -> Result<()> {
    let people = db.select_by_phone(phone_number)?;
    print_people(&people, json)
}
