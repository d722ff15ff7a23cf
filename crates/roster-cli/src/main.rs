//! Roster CLI
//!
//! Command-line interface for review records

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use config::RosterConfig;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - Employee review records", long_about = None)]
struct Cli {
    /// Config file (defaults to <config_dir>/roster/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database file, overriding config and ROSTER_DB_PATH
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the reviews table
    Init,
    /// Drop the reviews table
    Drop,
    /// Create a review
    Create(commands::review::CreateArgs),
    /// Show one review
    Show(commands::review::ShowArgs),
    /// List every review
    List(commands::review::ListArgs),
    /// Change fields of a review
    Update(commands::review::UpdateArgs),
    /// Delete a review
    Delete(commands::review::DeleteArgs),
    /// Employee directory operations
    Employee(commands::employee::EmployeeArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = RosterConfig::load_with_overrides(cli.config.as_deref(), cli.db)?;
    roster_core::logging_facility::init(config.log_profile()?);

    let conn = roster_store::db::open(&config.database.path)?;

    match cli.command {
        Commands::Init => commands::review::init(&conn),
        Commands::Drop => commands::review::drop_table(&conn),
        Commands::Create(args) => commands::review::create(&conn, args),
        Commands::Show(args) => commands::review::show(&conn, args),
        Commands::List(args) => commands::review::list(&conn, args),
        Commands::Update(args) => commands::review::update(&conn, args),
        Commands::Delete(args) => commands::review::delete(&conn, args),
        Commands::Employee(args) => commands::employee::execute(&conn, args),
    }
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
