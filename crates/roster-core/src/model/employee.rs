use serde::{Deserialize, Serialize};

/// Employee as seen through an `EmployeeDirectory`
///
/// Reviews never modify employees; this is a read-only view of a row owned
/// by the Employee module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Storage-assigned identifier
    pub id: i64,

    /// Full name
    pub name: String,

    /// Job title
    pub job_title: String,

    /// Owning department, if any
    pub department_id: Option<i64>,
}

impl Employee {
    /// Create an employee with no department
    pub fn new(id: i64, name: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            job_title: job_title.into(),
            department_id: None,
        }
    }

    /// Set the department
    pub fn with_department(mut self, department_id: i64) -> Self {
        self.department_id = Some(department_id);
        self
    }
}
