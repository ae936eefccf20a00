//! Net salary computation.
//!
//! All intermediate money figures are whole units; every fractional step
//! truncates toward zero.

use super::employee::Employee;
use crate::error::{RecordError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Late days up to this count are charged at the lower rate.
pub const LATE_DAYS_THRESHOLD: u32 = 3;
pub const LATE_PENALTY_LOW: u64 = 10_000;
pub const LATE_PENALTY_HIGH: u64 = 20_000;

/// Share of total income left after the fixed 10.5% deduction.
pub const DEDUCTION_FACTOR: Decimal = dec!(0.895);

/// Upper bound (inclusive) of the untaxed bracket.
pub const TAX_FREE_LIMIT: u64 = 11_000_000;
/// Upper bound (inclusive) of the 5% bracket.
pub const LOWER_BRACKET_LIMIT: u64 = 16_000_000;
pub const LOWER_BRACKET_RATE: Decimal = dec!(0.05);
pub const UPPER_BRACKET_RATE: Decimal = dec!(0.10);

/// Every figure produced while computing one employee's salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payslip {
    pub late_penalty: u64,
    pub income_without_bonus: u64,
    pub total_income: u64,
    pub income_after_deduction: u64,
    pub tax: u64,
    pub net_salary: u64,
}

pub fn late_penalty(late_coming_days: u32) -> u64 {
    let rate = if late_coming_days <= LATE_DAYS_THRESHOLD {
        LATE_PENALTY_LOW
    } else {
        LATE_PENALTY_HIGH
    };
    u64::from(late_coming_days) * rate
}

/// Tax owed on an income that has already had the deduction applied.
pub fn income_tax(income_after_deduction: u64) -> u64 {
    if income_after_deduction <= TAX_FREE_LIMIT {
        return 0;
    }
    let rate = if income_after_deduction <= LOWER_BRACKET_LIMIT {
        LOWER_BRACKET_RATE
    } else {
        UPPER_BRACKET_RATE
    };
    // The rate is below one, so the product always fits back into u64.
    (Decimal::from(income_after_deduction) * rate)
        .trunc()
        .to_u64()
        .unwrap_or(0)
}

/// Computes the full payslip for `employee`, given the bonus of their department
/// (0 when the department cannot be found).
pub fn compute_payslip(employee: &Employee, department_bonus: u64) -> Result<Payslip> {
    let overflow = || RecordError::PayrollOverflow(employee.id.clone());

    let late_penalty = late_penalty(employee.late_coming_days);

    let gross = Decimal::from(employee.salary_base)
        .checked_mul(Decimal::from(employee.working_days))
        .and_then(|gross| gross.checked_mul(employee.working_performance.value()))
        .ok_or_else(overflow)?;
    let income_without_bonus = gross.trunc().to_u64().ok_or_else(overflow)?;

    let income = income_without_bonus
        .checked_add(employee.bonus)
        .and_then(|income| income.checked_add(department_bonus))
        .ok_or_else(overflow)?;
    let total_income =
        income
            .checked_sub(late_penalty)
            .ok_or_else(|| RecordError::PayrollUnderflow {
                employee: employee.id.clone(),
                income,
                penalty: late_penalty,
            })?;

    let income_after_deduction = (Decimal::from(total_income) * DEDUCTION_FACTOR)
        .trunc()
        .to_u64()
        .ok_or_else(overflow)?;
    let tax = income_tax(income_after_deduction);

    Ok(Payslip {
        late_penalty,
        income_without_bonus,
        total_income,
        income_after_deduction,
        tax,
        net_salary: income_after_deduction - tax,
    })
}

/// Net salary actually received by `employee`.
pub fn compute_net_salary(employee: &Employee, department_bonus: u64) -> Result<u64> {
    compute_payslip(employee, department_bonus).map(|payslip| payslip.net_salary)
}
