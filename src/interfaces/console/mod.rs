//! Interactive text console: reads validated values from the operator,
//! drives the `EmployeeManager` and renders the results.

pub mod format;
pub mod menu;
pub mod prompt;
