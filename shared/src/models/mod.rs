//! Data models
//!
//! Wire shapes shared between employee-server and its clients.
//! Storage row types live next to the store in employee-server; these
//! structs are what travels over HTTP.

pub mod employee;

// Re-exports
pub use employee::*;
