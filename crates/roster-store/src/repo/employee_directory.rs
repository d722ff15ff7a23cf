//! Employee lookups against the `employees` table
//!
//! The table belongs to the Employee module. Reviews only read from it;
//! `ensure_table` and `insert` exist so a standalone database can be seeded.

#![allow(clippy::result_large_err)]

use roster_core::{Employee, EmployeeDirectory, RosterError};
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::{from_rusqlite, Result};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY,
    name TEXT,
    job_title TEXT,
    department_id INTEGER
)";
const INSERT_SQL: &str =
    "INSERT OR REPLACE INTO employees (id, name, job_title, department_id) VALUES (?1, ?2, ?3, ?4)";
const SELECT_BY_ID_SQL: &str =
    "SELECT id, name, job_title, department_id FROM employees WHERE id = ?1";

/// `EmployeeDirectory` backed by the shared SQLite connection
#[derive(Debug, Clone, Copy)]
pub struct SqliteEmployeeDirectory<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteEmployeeDirectory<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Create the `employees` table if it does not exist
    pub fn ensure_table(&self) -> Result<()> {
        self.conn
            .execute(CREATE_TABLE_SQL, [])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Add or replace an employee row
    pub fn insert(&self, employee: &Employee) -> Result<()> {
        self.conn
            .execute(
                INSERT_SQL,
                params![
                    employee.id,
                    employee.name,
                    employee.job_title,
                    employee.department_id
                ],
            )
            .map_err(from_rusqlite)?;
        tracing::debug!(employee_id = employee.id, "stored employee");
        Ok(())
    }
}

impl EmployeeDirectory for SqliteEmployeeDirectory<'_> {
    fn find_by_id(&self, employee_id: i64) -> roster_core::Result<Option<Employee>> {
        self.conn
            .query_row(SELECT_BY_ID_SQL, params![employee_id], |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    job_title: row.get(2)?,
                    department_id: row.get(3)?,
                })
            })
            .optional()
            .map_err(|e| RosterError::Storage(from_rusqlite(e)))
    }
}
