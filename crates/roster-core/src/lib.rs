//! Roster Core - in-memory model for review records
//!
//! This crate provides:
//! - The `Review` model, whose fields can only be set through validating
//!   constructors and setters
//! - Field validation rules (year, summary, employee reference)
//! - The `EmployeeDirectory` lookup seam used for foreign-key validation
//! - The canonical error facility (`RosterError`, `ExError`)
//! - The structured logging facility shared by every crate in the workspace
//!
//! Persistence lives in `roster-store`.

pub mod directory;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use directory::{EmployeeDirectory, InMemoryDirectory};
pub use errors::{ExError, ExErrorKind, Result, RosterError};
pub use model::{Employee, Review};
pub use roster_core_types::schema;
