use super::employee::{Department, Employee};
use crate::error::Result;
use async_trait::async_trait;

/// What `RecordStore::add_employee` did besides storing the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The employee joined a department that already existed.
    JoinedDepartment,
    /// The department did not exist and was created with the supplied bonus.
    CreatedDepartment,
}

/// Employees and departments read together under one lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Same order as `RecordStore::list_employees`.
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All employees, highest working performance first; ties keep insertion order.
    async fn list_employees(&self) -> Result<Vec<Employee>>;
    /// All departments in insertion order.
    async fn list_departments(&self) -> Result<Vec<Department>>;
    /// Both collections as of a single point in time.
    async fn snapshot(&self) -> Result<Snapshot>;
    async fn employee_exists(&self, id: &str) -> Result<bool>;
    async fn department(&self, id: &str) -> Result<Option<Department>>;
    /// Stores `candidate`, creating its department with `new_department_bonus`
    /// if and only if no department with that id exists yet.
    async fn add_employee(
        &self,
        candidate: Employee,
        new_department_bonus: u64,
    ) -> Result<AddOutcome>;
    async fn delete_employee(&self, id: &str) -> Result<Employee>;
    /// Removes a department no employee refers to.
    async fn delete_department(&self, id: &str) -> Result<Department>;
}

pub type RecordStoreBox = Box<dyn RecordStore>;
