//! Domain types and pure payroll logic shared by the db and api crates.

pub mod error;
pub mod payroll;
pub mod types;
pub mod validation;
