//! Repository layer for persisting review records to SQLite

pub mod employee_directory;
pub mod review_repo;

pub use employee_directory::SqliteEmployeeDirectory;
pub use review_repo::{ReviewRepo, ReviewRow};
