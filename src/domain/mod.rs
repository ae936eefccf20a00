//! Domain model: records, the payroll computation and the storage port.

pub mod employee;
pub mod payroll;
pub mod ports;
