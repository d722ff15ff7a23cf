#![allow(dead_code)]

use roster_core::{Employee, InMemoryDirectory};
use roster_store::{ReviewRepo, SqliteEmployeeDirectory};
use rusqlite::Connection;

/// Employee ids present in every test directory
pub const KNOWN_EMPLOYEES: [i64; 3] = [1, 2, 3];

pub fn staff() -> Vec<Employee> {
    vec![
        Employee::new(1, "Ada Lovelace", "Engineer"),
        Employee::new(2, "Grace Hopper", "Admiral").with_department(7),
        Employee::new(3, "Alan Turing", "Researcher"),
    ]
}

pub fn staff_directory() -> InMemoryDirectory {
    staff().into_iter().collect()
}

/// In-memory connection with the `employees` table seeded from `staff()`
pub fn seeded_connection() -> Connection {
    let conn = roster_store::db::open_in_memory().unwrap();
    let directory = SqliteEmployeeDirectory::new(&conn);
    directory.ensure_table().unwrap();
    for employee in staff() {
        directory.insert(&employee).unwrap();
    }
    conn
}

/// Repo over `conn` with the reviews table already created
pub fn ready_repo(conn: &Connection) -> ReviewRepo<'_, InMemoryDirectory> {
    let repo = ReviewRepo::new(conn, staff_directory());
    repo.create_table().unwrap();
    repo
}

pub fn count_rows(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))
        .unwrap()
}
