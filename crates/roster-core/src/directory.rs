//! Employee lookup capability
//!
//! Reviews only need to know whether an employee exists. The Employee
//! module owns the real data; this trait is the narrow seam between the two.

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::Employee;

/// Lookup-by-id access to Employee records
pub trait EmployeeDirectory {
    /// Find an employee by id
    ///
    /// Returns `Ok(None)` when no such employee exists.
    ///
    /// # Errors
    /// Returns `RosterError::Storage` when the lookup itself fails.
    fn find_by_id(&self, employee_id: i64) -> Result<Option<Employee>>;
}

impl<T: EmployeeDirectory + ?Sized> EmployeeDirectory for &T {
    fn find_by_id(&self, employee_id: i64) -> Result<Option<Employee>> {
        (**self).find_by_id(employee_id)
    }
}

impl<T: EmployeeDirectory + ?Sized> EmployeeDirectory for Box<T> {
    fn find_by_id(&self, employee_id: i64) -> Result<Option<Employee>> {
        (**self).find_by_id(employee_id)
    }
}

/// In-memory directory backed by a BTreeMap
///
/// Useful for tests and for embedding callers that already hold their
/// employees in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    employees: BTreeMap<i64, Employee>,
}

impl InMemoryDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an employee
    pub fn insert(&mut self, employee: Employee) {
        self.employees.insert(employee.id, employee);
    }

    /// Remove an employee, returning it if present
    pub fn remove(&mut self, employee_id: i64) -> Option<Employee> {
        self.employees.remove(&employee_id)
    }

    /// Number of employees held
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// True if no employees are held
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl FromIterator<Employee> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut directory = Self::new();
        for employee in iter {
            directory.insert(employee);
        }
        directory
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn find_by_id(&self, employee_id: i64) -> Result<Option<Employee>> {
        Ok(self.employees.get(&employee_id).cloned())
    }
}
