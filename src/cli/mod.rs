use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::db::Database;
use crate::models::PersonRecord;
use crate::validate;

pub mod add;
pub mod display;
pub mod list;
pub mod search;

pub use add::run_add;
pub use display::{format_people, print_people, render_people, EMPTY_MESSAGE};
pub use list::run_display;
pub use search::run_select;

#[derive(Debug, Parser)]
#[command(name = "people")]
#[command(about = "Record and look up people by name, birth date and phone number")]
#[command(version)]
pub struct Cli {
    /// The data file name (defaults to ~/people.db)
    #[arg(long, global = true, env = "PEOPLE_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a new person
    Add(AddArgs),
    /// Display all people
    Display(DisplayArgs),
    /// Select people by phone number
    Select(SelectArgs),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// The person's name
    #[arg(short, long)]
    pub name: String,
    /// The person's birth date
    #[arg(short, long = "birth_date", visible_alias = "birth-date")]
    pub birth_date: String,
    /// The person's phone number
    #[arg(short, long = "phone_number", visible_alias = "phone-number")]
    pub phone_number: String,
    /// Reject blank fields and malformed phone numbers
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Print rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// The phone number to look up
    #[arg(long = "sp", value_name = "PHONE")]
    pub phone_number: String,
    /// Print rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Open the configured database (creating the schema if needed) and run one
/// command against it. The connection is closed when this returns.
pub fn run(config: &Config, command: Commands) -> Result<()> {
    let db = Database::open_at(&config.db_path)?;
    dispatch(&db, command)
}

/// Run one command against an already-open database.
pub fn dispatch(db: &Database, command: Commands) -> Result<()> {
    debug!(?command, "dispatching");

    match command {
        Commands::Add(args) => {
            let record = PersonRecord::new(args.name, args.birth_date, args.phone_number);
            let policy = validate::policy(args.strict);
            run_add(db, record, policy.as_ref())?;
        }
        Commands::Display(args) => {
            run_display(db, args.json)?;
        }
        Commands::Select(args) => {
            run_select(db, &args.phone_number, args.json)?;
        }
    }

    Ok(())
}
