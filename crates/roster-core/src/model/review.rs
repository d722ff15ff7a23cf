use std::fmt;

use serde::Serialize;

use crate::directory::EmployeeDirectory;
use crate::errors::Result;
use crate::rules::validation::{validate_employee_id, validate_summary, validate_year};

/// Review - one performance review record
///
/// Fields are private so a Review can only be built or changed through the
/// validating constructor and setters. An invalid year, summary or
/// employee_id is never observable.
///
/// `id` is `None` until the record is inserted, and goes back to `None` when
/// the row is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    id: Option<i64>,
    year: i64,
    summary: String,
    employee_id: i64,
}

impl Review {
    /// Build an unpersisted Review
    ///
    /// # Errors
    /// * `InvalidYear` - If year is below 2000
    /// * `InvalidSummary` - If summary is empty or whitespace-only
    /// * `UnknownEmployee` - If no employee with `employee_id` exists
    /// * `Storage` - If the directory lookup fails
    pub fn new<D>(
        year: i64,
        summary: impl Into<String>,
        employee_id: i64,
        directory: &D,
    ) -> Result<Self>
    where
        D: EmployeeDirectory + ?Sized,
    {
        Ok(Self {
            id: None,
            year: validate_year(year)?,
            summary: validate_summary(summary.into())?,
            employee_id: validate_employee_id(employee_id, directory)?,
        })
    }

    /// Build a Review for a row already in storage
    ///
    /// Runs the same validation as `new`.
    pub fn from_row<D>(
        id: i64,
        year: i64,
        summary: impl Into<String>,
        employee_id: i64,
        directory: &D,
    ) -> Result<Self>
    where
        D: EmployeeDirectory + ?Sized,
    {
        let mut review = Self::new(year, summary, employee_id, directory)?;
        review.id = Some(id);
        Ok(review)
    }

    /// Storage identifier, `None` when unpersisted or deleted
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn employee_id(&self) -> i64 {
        self.employee_id
    }

    /// True once the record has a storage identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Set the year, leaving the old value in place on failure
    ///
    /// # Errors
    /// * `InvalidYear` - If year is below 2000
    pub fn set_year(&mut self, year: i64) -> Result<()> {
        self.year = validate_year(year)?;
        Ok(())
    }

    /// Set the summary, leaving the old value in place on failure
    ///
    /// # Errors
    /// * `InvalidSummary` - If summary is empty or whitespace-only
    pub fn set_summary(&mut self, summary: impl Into<String>) -> Result<()> {
        self.summary = validate_summary(summary.into())?;
        Ok(())
    }

    /// Set the employee, leaving the old value in place on failure
    ///
    /// # Errors
    /// * `UnknownEmployee` - If no employee with `employee_id` exists
    /// * `Storage` - If the directory lookup fails
    pub fn set_employee_id<D>(&mut self, employee_id: i64, directory: &D) -> Result<()>
    where
        D: EmployeeDirectory + ?Sized,
    {
        self.employee_id = validate_employee_id(employee_id, directory)?;
        Ok(())
    }

    /// Record the identifier storage assigned on insert
    pub fn mark_persisted(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Clear the identifier after the row is deleted
    ///
    /// The record keeps its field values and can be saved again as a new row.
    pub fn detach(&mut self) {
        self.id = None;
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Review id=")?;
        match self.id {
            Some(id) => write!(f, "{}", id)?,
            None => write!(f, "None")?,
        }
        write!(
            f,
            " year={} summary={:?} employee_id={}>",
            self.year, self.summary, self.employee_id
        )
    }
}
