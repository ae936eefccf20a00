use rust_decimal::Decimal;
use staffbook::domain::employee::{Employee, Performance};

#[allow(dead_code)]
pub fn employee(id: &str, department_id: &str, performance: Decimal) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Employee {id}"),
        department_id: department_id.to_string(),
        salary_base: 1_000_000,
        working_days: 20,
        working_performance: Performance::new(performance).unwrap(),
        bonus: 500_000,
        late_coming_days: 0,
    }
}

/// Builds the stdin script that adds one employee through the console menu.
/// `department_bonus` is only answered when the department is new.
#[allow(dead_code)]
pub fn add_employee_script(
    id: &str,
    department_id: &str,
    performance: &str,
    department_bonus: Option<u64>,
) -> String {
    let mut script =
        format!("3\n{id}\n{department_id}\nEmployee {id}\n1000000\n20\n{performance}\n500000\n0\n");
    if let Some(bonus) = department_bonus {
        script.push_str(&format!("{bonus}\n"));
    }
    script
}
