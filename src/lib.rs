#![doc(test(attr(deny(warnings))))]

//! Expense Core wires the IT expense dashboard engine (`itex-core`) into an
//! interactive shell: seed data, money and date formatting, CSV export files,
//! and the command loop.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod seed;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
