//! itex-domain
//!
//! Pure domain models for the IT expense dashboard (Category, Transaction,
//! YearlyBudget, TransactionFilter). No I/O, no CLI, no storage.

pub mod budget;
pub mod category;
pub mod common;
pub mod filter;
pub mod transaction;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use filter::*;
pub use transaction::*;
