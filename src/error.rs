use std::fmt;
use thiserror::Error;

/// The two collections held by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Employees,
    Departments,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Employees => f.write_str("employees"),
            Collection::Departments => f.write_str("departments"),
        }
    }
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("An employee with ID {0} already exists")]
    DuplicateId(String),
    #[error("No employee has ID {0}")]
    EmployeeNotFound(String),
    #[error("No department has ID {0}")]
    DepartmentNotFound(String),
    #[error("You cannot delete department {0} because it still has employees")]
    DepartmentHasEmployees(String),
    #[error("There are no {0}")]
    EmptyCollection(Collection),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Late coming penalty of {penalty} exceeds income of {income} for employee {employee}")]
    PayrollUnderflow {
        employee: String,
        income: u64,
        penalty: u64,
    },
    #[error("Salary of employee {0} is too large to compute")]
    PayrollOverflow(String),
    #[error("Terminal error: {0}")]
    Terminal(#[from] dialoguer::Error),
    #[error("Input closed")]
    InputClosed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
