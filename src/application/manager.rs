use crate::domain::employee::{Department, Employee};
use crate::domain::payroll::{Payslip, compute_payslip};
use crate::domain::ports::{AddOutcome, RecordStoreBox, Snapshot};
use crate::error::{Collection, RecordError, Result};
use std::collections::HashMap;
use tracing::{debug, warn};

/// One line of the payroll report.
#[derive(Debug)]
pub struct PayrollEntry {
    pub employee: Employee,
    /// Bonus of the employee's department, 0 if the department is missing.
    pub department_bonus: u64,
    pub payslip: Result<Payslip>,
}

/// Entry point for managing employees, departments and payroll.
///
/// `EmployeeManager` owns the storage backend and is the only component the
/// console talks to. Invariants are enforced by the store; the manager adds
/// department bonus resolution for payroll.
pub struct EmployeeManager {
    store: RecordStoreBox,
}

impl EmployeeManager {
    /// Creates a new `EmployeeManager` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - The store holding employees and departments.
    pub fn new(store: RecordStoreBox) -> Self {
        Self { store }
    }

    /// Employees ordered by working performance, highest first.
    pub async fn employees(&self) -> Result<Vec<Employee>> {
        self.store.list_employees().await
    }

    pub async fn departments(&self) -> Result<Vec<Department>> {
        self.store.list_departments().await
    }

    pub async fn employee_exists(&self, id: &str) -> Result<bool> {
        self.store.employee_exists(id).await
    }

    pub async fn department_exists(&self, id: &str) -> Result<bool> {
        Ok(self.store.department(id).await?.is_some())
    }

    /// Adds a new employee, creating its department when it does not exist yet.
    ///
    /// # Arguments
    ///
    /// * `employee` - The employee to store. Its ID must not be taken.
    /// * `new_department_bonus` - Bonus of the department, only used when the
    ///   department has to be created.
    pub async fn add_employee(
        &self,
        employee: Employee,
        new_department_bonus: u64,
    ) -> Result<AddOutcome> {
        self.store.add_employee(employee, new_department_bonus).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<Employee> {
        self.store.delete_employee(id).await
    }

    pub async fn delete_department(&self, id: &str) -> Result<Department> {
        self.store.delete_department(id).await
    }

    /// Computes the payslip of every employee, in the same order as `employees`.
    ///
    /// Employees and department bonuses come from one store snapshot, so an
    /// employee added concurrently is either absent or paid with its bonus.
    /// A failed computation is reported in its own entry and does not stop
    /// the rest of the report.
    ///
    /// # Errors
    ///
    /// `RecordError::EmptyCollection` when there are no employees to pay.
    pub async fn payroll(&self) -> Result<Vec<PayrollEntry>> {
        let Snapshot {
            employees,
            departments,
        } = self.store.snapshot().await?;
        if employees.is_empty() {
            return Err(RecordError::EmptyCollection(Collection::Employees));
        }
        let bonuses: HashMap<String, u64> = departments
            .into_iter()
            .map(|d| (d.id, d.bonus_salary))
            .collect();

        let entries = employees
            .into_iter()
            .map(|employee| {
                let department_bonus = bonuses
                    .get(&employee.department_id)
                    .copied()
                    .unwrap_or_default();
                let payslip = compute_payslip(&employee, department_bonus);
                if let Err(e) = &payslip {
                    warn!(employee = %employee.id, error = %e, "payroll computation failed");
                }
                PayrollEntry {
                    employee,
                    department_bonus,
                    payslip,
                }
            })
            .collect::<Vec<_>>();
        debug!(count = entries.len(), "computed payroll");
        Ok(entries)
    }
}
