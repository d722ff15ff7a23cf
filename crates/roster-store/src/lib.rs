//! Roster Store - SQLite persistence for review records
//!
//! Provides:
//! - Connection helpers (`db`)
//! - `ReviewRepo`: the review record manager with its identity cache
//! - `SqliteEmployeeDirectory`: employee lookups against the `employees` table

pub mod db;
pub mod errors;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{ReviewRepo, ReviewRow, SqliteEmployeeDirectory};
