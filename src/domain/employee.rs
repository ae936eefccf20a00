use crate::error::{RecordError, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A strictly positive working-performance multiplier.
///
/// Wraps `rust_decimal::Decimal` so that the multiplier applied to salaries is
/// exact and so that employees can be totally ordered by performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Performance(Decimal);

impl Performance {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(RecordError::Validation(
                "Working performance must be more than 0".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Performance {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        let value = Decimal::from_str(s.trim()).map_err(|_| {
            RecordError::Validation(format!("{s:?} is not a decimal number"))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A staff member as held by the record store.
///
/// Money fields are whole units of the smallest denomination.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    /// Unique, case-sensitive identifier.
    pub id: String,
    pub name: String,
    /// Identifier of the department this employee belongs to.
    pub department_id: String,
    pub salary_base: u64,
    pub working_days: u32,
    pub working_performance: Performance,
    pub bonus: u64,
    pub late_coming_days: u32,
}

impl Employee {
    /// Checks the text fields are non-empty once surrounding whitespace is removed.
    pub fn validate(&self) -> Result<()> {
        require_text("Employee ID", &self.id)?;
        require_text("Employee name", &self.name)?;
        require_text("Department ID", &self.department_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: String,
    /// Flat bonus paid to every employee of this department.
    pub bonus_salary: u64,
}

impl Department {
    pub fn new(id: impl Into<String>, bonus_salary: u64) -> Self {
        Self {
            id: id.into(),
            bonus_salary,
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(RecordError::Validation(format!("{field} must not be blank")))
    } else {
        Ok(())
    }
}
