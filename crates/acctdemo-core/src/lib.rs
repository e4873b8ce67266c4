//! Core account model for acctdemo.
//!
//! This crate provides the `Account` type with its closed set of kinds
//! (generic, savings, current), the balance operations and the report
//! rendering used by the demonstration driver.

pub mod models;
pub mod operations;

// Re-export key types at crate root for convenience
pub use models::{Account, AccountKind, MIN_SAVINGS_BALANCE, summary_table};
pub use operations::AccountError;
