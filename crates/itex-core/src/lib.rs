//! itex-core
//!
//! Aggregation, query, and state-transition services for the IT expense
//! dashboard. Depends on itex-domain. No CLI, no terminal I/O, no storage.

pub mod budget_service;
pub mod category_service;
pub mod dashboard_service;
pub mod error;
pub mod export;
pub mod filter_service;
pub mod state;
pub mod summary_service;
pub mod time;
pub mod transaction_service;
pub mod trend_service;

pub use budget_service::*;
pub use category_service::*;
pub use dashboard_service::*;
pub use error::{CoreError, CoreResult};
pub use export::*;
pub use filter_service::*;
pub use state::DashboardState;
pub use summary_service::*;
pub use time::{Clock, FixedClock};
pub use transaction_service::*;
pub use trend_service::*;

#[cfg(test)]
mod tests;
