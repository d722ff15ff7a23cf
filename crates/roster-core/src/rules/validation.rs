use crate::directory::EmployeeDirectory;
use crate::errors::{Result, RosterError};

/// Earliest year a review may be recorded for
pub const MIN_REVIEW_YEAR: i64 = 2000;

/// Validate a review year
///
/// # Errors
/// * `InvalidYear` - If `year` is below `MIN_REVIEW_YEAR`
pub fn validate_year(year: i64) -> Result<i64> {
    if year < MIN_REVIEW_YEAR {
        return Err(RosterError::InvalidYear { year });
    }
    Ok(year)
}

/// Validate a review summary
///
/// The summary is stored as given; trimming is only used for the emptiness
/// check.
///
/// # Errors
/// * `InvalidSummary` - If `summary` is empty or whitespace-only
pub fn validate_summary(summary: String) -> Result<String> {
    if summary.is_empty() {
        return Err(RosterError::InvalidSummary {
            reason: "Summary cannot be empty".to_string(),
        });
    }
    if summary.trim().is_empty() {
        return Err(RosterError::InvalidSummary {
            reason: "Summary cannot be whitespace-only".to_string(),
        });
    }
    Ok(summary)
}

/// Validate that `employee_id` references an existing Employee
///
/// # Errors
/// * `UnknownEmployee` - If the directory has no such employee
/// * `Storage` - If the directory lookup itself fails (propagated unchanged)
pub fn validate_employee_id<D>(employee_id: i64, directory: &D) -> Result<i64>
where
    D: EmployeeDirectory + ?Sized,
{
    match directory.find_by_id(employee_id)? {
        Some(_) => Ok(employee_id),
        None => Err(RosterError::UnknownEmployee { employee_id }),
    }
}
