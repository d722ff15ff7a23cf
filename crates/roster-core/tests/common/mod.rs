use roster_core::{Employee, InMemoryDirectory};

/// Employee ids present in `staff_directory()`
#[allow(dead_code)]
pub const KNOWN_EMPLOYEES: [i64; 3] = [1, 2, 3];

/// Directory with three employees (ids 1, 2, 3)
#[allow(dead_code)]
pub fn staff_directory() -> InMemoryDirectory {
    [
        Employee::new(1, "Ada Lovelace", "Engineer").with_department(1),
        Employee::new(2, "Grace Hopper", "Admiral").with_department(1),
        Employee::new(3, "Alan Turing", "Researcher").with_department(2),
    ]
    .into_iter()
    .collect()
}

/// Directory with no employees at all
#[allow(dead_code)]
pub fn empty_directory() -> InMemoryDirectory {
    InMemoryDirectory::new()
}
