//! Storage row types
//!
//! Rows as SQLite returns them. API handlers never see these; they are
//! converted into `shared::models` wire types at the repository boundary.

pub mod employee;

pub use employee::EmployeeRow;
