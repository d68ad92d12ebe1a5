use anyhow::Result;

use crate::models::PersonRecord;

/// Printed instead of a table when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "Список людей пуст.";

const INDEX_WIDTH: usize = 4;
const NAME_WIDTH: usize = 30;
const BIRTH_DATE_WIDTH: usize = 20;
const PHONE_WIDTH: usize = 15;

fn border() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(BIRTH_DATE_WIDTH),
        "-".repeat(PHONE_WIDTH),
    )
}

fn table_row(index: &str, name: &str, birth_date: &str, phone: &str) -> String {
    format!(
        "| {:^iw$} | {:^nw$} | {:^bw$} | {:^pw$} |",
        index,
        name,
        birth_date,
        phone,
        iw = INDEX_WIDTH,
        nw = NAME_WIDTH,
        bw = BIRTH_DATE_WIDTH,
        pw = PHONE_WIDTH,
    )
}

/// Render people as a bordered table with a 1-based index column, or the
/// empty-list message. Widths count characters; longer values overflow.
pub fn render_people(people: &[PersonRecord]) -> String {
    if people.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let line = border();
    let mut out = String::new();

    out.push_str(&line);
    out.push('\n');
    out.push_str(&table_row("№", "Имя", "Дата рождения", "Номер телефона"));
    out.push('\n');
    out.push_str(&line);
    out.push('\n');

    for (idx, person) in people.iter().enumerate() {
        out.push_str(&table_row(
            &(idx + 1).to_string(),
            &person.full_name,
            &person.birth_date,
            &person.phone_number,
        ));
        out.push('\n');
        out.push_str(&line);
        out.push('\n');
    }

    out
}

/// Table text, or a JSON array when `json` is set.
pub fn format_people(people: &[PersonRecord], json: bool) -> Result<String> {
    if json {
        let mut text = serde_json::to_string_pretty(people)?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(render_people(people))
    }
}

pub fn print_people(people: &[PersonRecord], json: bool) -> Result<()> {
    print!("{}", format_people(people, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE_WIDTH: usize = 82;

    #[test]
    fn test_empty_message() {
        assert_eq!(render_people(&[]), "Список людей пуст.\n");
    }

    #[test]
    fn test_table_layout() {
        let people = vec![
            PersonRecord::new("Артем", "22", "5555"),
            PersonRecord::new("Анна Иванова", "1990-01-01", "+7 912 345"),
        ];
        let text = render_people(&people);
        let lines: Vec<&str> = text.lines().collect();

        // border, header, border, then row + border per person
        assert_eq!(lines.len(), 3 + 2 * people.len());
        for line in &lines {
            assert_eq!(line.chars().count(), LINE_WIDTH, "{}", line);
        }

        assert_eq!(lines[0], lines[2]);
        assert!(lines[0].starts_with("+------+----"));
        assert!(lines[1].contains("Дата рождения"));
        assert!(lines[3].starts_with("|  1   | "));
        assert!(lines[3].contains("Артем"));
        assert!(lines[5].starts_with("|  2   | "));
        assert!(lines[5].contains("+7 912 345"));
    }

    #[test]
    fn test_cells_are_centered() {
        let text = render_people(&[PersonRecord::new("ab", "12", "34")]);
        let row = text.lines().nth(3).unwrap();

        let name_cell = format!("|{}ab{}|", " ".repeat(15), " ".repeat(15));
        assert!(row.contains(&name_cell), "{}", row);
    }

    #[test]
    fn test_long_values_overflow() {
        let long_name = "x".repeat(40);
        let text = render_people(&[PersonRecord::new(long_name.clone(), "1", "2")]);
        let row = text.lines().nth(3).unwrap();

        assert!(row.contains(&long_name));
        assert!(row.chars().count() > LINE_WIDTH);
    }

    #[test]
    fn test_json_output() {
        let people = vec![PersonRecord::new("Артем", "22", "5555")];
        let text = format_people(&people, true).unwrap();

        let parsed: Vec<PersonRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, people);
        assert_eq!(format_people(&[], true).unwrap().trim(), "[]");
    }

    #[test]
    fn test_print_people_does_not_panic() {
        print_people(&[PersonRecord::new("Артем", "22", "5555")], false).unwrap();
        print_people(&[], false).unwrap();
    }
}
