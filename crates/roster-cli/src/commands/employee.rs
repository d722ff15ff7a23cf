//! Employee commands
//!
//! The employees table belongs to the Employee module; these commands only
//! seed and inspect it so reviews have something to reference.

use clap::{Args, Subcommand};
use roster_core::{Employee, EmployeeDirectory, ExError, ExErrorKind};
use roster_store::SqliteEmployeeDirectory;
use rusqlite::Connection;

use super::review::logged;

#[derive(Debug, Args)]
pub struct EmployeeArgs {
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// Add or replace an employee
    Add(AddArgs),
    /// Show one employee
    Show { id: i64 },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub job_title: String,

    #[arg(long)]
    pub department: Option<i64>,
}

pub fn execute(conn: &Connection, args: EmployeeArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        EmployeeCommand::Add(add) => {
            let employee = Employee {
                id: add.id,
                name: add.name,
                job_title: add.job_title,
                department_id: add.department,
            };
            logged("employee_add", || add_employee(conn, &employee))?;
            println!("Employee {} stored", employee.id);
        }
        EmployeeCommand::Show { id } => {
            let employee = logged("employee_show", || find_employee(conn, id))?;
            println!(
                "{} {} ({})",
                employee.id, employee.name, employee.job_title
            );
        }
    }
    Ok(())
}

fn add_employee(conn: &Connection, employee: &Employee) -> Result<(), ExError> {
    let directory = SqliteEmployeeDirectory::new(conn);
    directory.ensure_table()?;
    directory.insert(employee)
}

fn find_employee(conn: &Connection, id: i64) -> Result<Employee, ExError> {
    SqliteEmployeeDirectory::new(conn)
        .find_by_id(id)?
        .ok_or_else(|| {
            ExError::new(ExErrorKind::NotFound)
                .with_op("employee_show")
                .with_entity_id(id.to_string())
                .with_message(format!("Employee {} not found", id))
        })
}
