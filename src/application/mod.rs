//! Application layer orchestrating the record store and the payroll computation.
//!
//! `EmployeeManager` is the single entry point used by the console. It owns the
//! storage backend behind the `RecordStore` port and resolves department
//! bonuses when producing payroll.

pub mod manager;
