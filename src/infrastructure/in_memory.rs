use crate::domain::employee::{Department, Employee};
use crate::domain::ports::{AddOutcome, RecordStore, Snapshot};
use crate::error::{Collection, RecordError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Default)]
struct Records {
    employees: Vec<Employee>,
    departments: Vec<Department>,
}

impl Records {
    fn has_department(&self, id: &str) -> bool {
        self.departments.iter().any(|d| d.id == id)
    }

    fn employees_by_performance(&self) -> Vec<Employee> {
        let mut employees = self.employees.clone();
        // `sort_by` is stable: equal performances keep insertion order.
        employees.sort_by(|a, b| b.working_performance.cmp(&a.working_performance));
        employees
    }
}

/// A thread-safe in-memory record store.
///
/// Employees and departments share a single `RwLock`, so each mutation
/// (including the department check-then-create of `add_employee`) is one
/// critical section. Both collections keep insertion order.
#[derive(Default, Clone)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Records>>,
}

impl InMemoryRecordStore {
    /// Creates a new, empty in-memory record store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let records = self.records.read().await;
        let employees = records.employees_by_performance();
        debug!(count = employees.len(), "listed employees");
        Ok(employees)
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        let records = self.records.read().await;
        debug!(count = records.departments.len(), "listed departments");
        Ok(records.departments.clone())
    }

    async fn snapshot(&self) -> Result<Snapshot> {
        let records = self.records.read().await;
        Ok(Snapshot {
            employees: records.employees_by_performance(),
            departments: records.departments.clone(),
        })
    }

    async fn employee_exists(&self, id: &str) -> Result<bool> {
        let records = self.records.read().await;
        Ok(records.employees.iter().any(|e| e.id == id))
    }

    async fn department(&self, id: &str) -> Result<Option<Department>> {
        let records = self.records.read().await;
        Ok(records.departments.iter().find(|d| d.id == id).cloned())
    }

    async fn add_employee(
        &self,
        candidate: Employee,
        new_department_bonus: u64,
    ) -> Result<AddOutcome> {
        candidate.validate()?;

        let mut records = self.records.write().await;
        if records.employees.iter().any(|e| e.id == candidate.id) {
            warn!(employee = %candidate.id, "rejected duplicate employee id");
            return Err(RecordError::DuplicateId(candidate.id));
        }

        let outcome = if records.has_department(&candidate.department_id) {
            AddOutcome::JoinedDepartment
        } else {
            info!(
                department = %candidate.department_id,
                bonus = new_department_bonus,
                "created department"
            );
            records.departments.push(Department::new(
                candidate.department_id.clone(),
                new_department_bonus,
            ));
            AddOutcome::CreatedDepartment
        };

        info!(employee = %candidate.id, department = %candidate.department_id, "added employee");
        records.employees.push(candidate);
        Ok(outcome)
    }

    async fn delete_employee(&self, id: &str) -> Result<Employee> {
        let mut records = self.records.write().await;
        if records.employees.is_empty() {
            return Err(RecordError::EmptyCollection(Collection::Employees));
        }

        let Some(index) = records.employees.iter().position(|e| e.id == id) else {
            warn!(employee = id, "employee to delete not found");
            return Err(RecordError::EmployeeNotFound(id.to_string()));
        };
        let removed = records.employees.remove(index);
        info!(employee = id, "deleted employee");
        Ok(removed)
    }

    async fn delete_department(&self, id: &str) -> Result<Department> {
        let mut records = self.records.write().await;
        if records.departments.is_empty() {
            return Err(RecordError::EmptyCollection(Collection::Departments));
        }

        let Some(index) = records.departments.iter().position(|d| d.id == id) else {
            warn!(department = id, "department to delete not found");
            return Err(RecordError::DepartmentNotFound(id.to_string()));
        };
        if records.employees.iter().any(|e| e.department_id == id) {
            warn!(department = id, "department still has employees");
            return Err(RecordError::DepartmentHasEmployees(id.to_string()));
        }
        let removed = records.departments.remove(index);
        info!(department = id, "deleted department");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::Performance;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn employee(id: &str, department_id: &str, performance: Decimal) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {id}"),
            department_id: department_id.to_string(),
            salary_base: 1_000_000,
            working_days: 22,
            working_performance: Performance::new(performance).unwrap(),
            bonus: 0,
            late_coming_days: 0,
        }
    }

    fn ids(employees: &[Employee]) -> Vec<&str> {
        employees.iter().map(|e| e.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_add_creates_department_once() {
        let store = InMemoryRecordStore::new();

        let first = store.add_employee(employee("E1", "D1", dec!(1)), 300_000).await;
        assert_eq!(first.unwrap(), AddOutcome::CreatedDepartment);
        let second = store.add_employee(employee("E2", "D1", dec!(1)), 999).await;
        assert_eq!(second.unwrap(), AddOutcome::JoinedDepartment);

        let departments = store.list_departments().await.unwrap();
        assert_eq!(departments, vec![Department::new("D1", 300_000)]);
    }

    #[tokio::test]
    async fn test_duplicate_id_leaves_store_unchanged() {
        let store = InMemoryRecordStore::new();
        store.add_employee(employee("E1", "D1", dec!(1)), 0).await.unwrap();

        let result = store.add_employee(employee("E1", "D2", dec!(2)), 0).await;
        assert!(matches!(result, Err(RecordError::DuplicateId(id)) if id == "E1"));

        let employees = store.list_employees().await.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].department_id, "D1");
        assert!(store.department("D2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_case_sensitive() {
        let store = InMemoryRecordStore::new();
        store.add_employee(employee("e1", "D1", dec!(1)), 0).await.unwrap();
        store.add_employee(employee("E1", "D1", dec!(1)), 0).await.unwrap();
        assert!(store.employee_exists("e1").await.unwrap());
        assert!(!store.employee_exists("E2").await.unwrap());
    }

    #[tokio::test]
    async fn test_blank_candidate_rejected() {
        let store = InMemoryRecordStore::new();
        let result = store.add_employee(employee("E1", " ", dec!(1)), 0).await;
        assert!(matches!(result, Err(RecordError::Validation(_))));
        assert!(store.list_departments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_employees_sorted_and_stable() {
        let store = InMemoryRecordStore::new();
        store.add_employee(employee("A", "D", dec!(1.0)), 0).await.unwrap();
        store.add_employee(employee("B", "D", dec!(2.5)), 0).await.unwrap();
        store.add_employee(employee("C", "D", dec!(1.00)), 0).await.unwrap();
        store.add_employee(employee("D", "D", dec!(2.5)), 0).await.unwrap();

        let listed = store.list_employees().await.unwrap();
        assert_eq!(ids(&listed), vec!["B", "D", "A", "C"]);

        // Listing is a view; deletion still sees insertion order.
        store.delete_employee("B").await.unwrap();
        let listed = store.list_employees().await.unwrap();
        assert_eq!(ids(&listed), vec!["D", "A", "C"]);
    }

    #[tokio::test]
    async fn test_snapshot_matches_listings() {
        let store = InMemoryRecordStore::new();
        assert_eq!(store.snapshot().await.unwrap(), Snapshot::default());

        store.add_employee(employee("A", "D1", dec!(1)), 5).await.unwrap();
        store.add_employee(employee("B", "D2", dec!(3)), 7).await.unwrap();

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.employees, store.list_employees().await.unwrap());
        assert_eq!(snapshot.departments, store.list_departments().await.unwrap());
        assert_eq!(ids(&snapshot.employees), vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_delete_employee() {
        let store = InMemoryRecordStore::new();
        assert!(matches!(
            store.delete_employee("E1").await,
            Err(RecordError::EmptyCollection(Collection::Employees))
        ));

        store.add_employee(employee("E1", "D1", dec!(1)), 0).await.unwrap();
        store.add_employee(employee("E2", "D1", dec!(1)), 0).await.unwrap();
        assert!(matches!(
            store.delete_employee("E3").await,
            Err(RecordError::EmployeeNotFound(_))
        ));

        let removed = store.delete_employee("E1").await.unwrap();
        assert_eq!(removed.id, "E1");
        assert_eq!(ids(&store.list_employees().await.unwrap()), vec!["E2"]);
    }

    #[tokio::test]
    async fn test_delete_department_gate() {
        let store = InMemoryRecordStore::new();
        assert!(matches!(
            store.delete_department("D1").await,
            Err(RecordError::EmptyCollection(Collection::Departments))
        ));

        store.add_employee(employee("E1", "D1", dec!(1)), 10).await.unwrap();
        store.add_employee(employee("E2", "D2", dec!(1)), 20).await.unwrap();

        assert!(matches!(
            store.delete_department("D1").await,
            Err(RecordError::DepartmentHasEmployees(_))
        ));
        assert!(matches!(
            store.delete_department("D9").await,
            Err(RecordError::DepartmentNotFound(_))
        ));
        assert_eq!(store.list_departments().await.unwrap().len(), 2);

        store.delete_employee("E1").await.unwrap();
        let removed = store.delete_department("D1").await.unwrap();
        assert_eq!(removed, Department::new("D1", 10));
        assert_eq!(
            store.list_departments().await.unwrap(),
            vec![Department::new("D2", 20)]
        );
    }
}
