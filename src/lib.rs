#![doc(test(attr(deny(warnings))))]

//! Tally is a personal budgeting ledger: set a budget for a period, record
//! incomes and expenses against it, and review where the money went.

pub mod cli;
pub mod utils;

pub use tally_config as config;
pub use tally_core as core;
pub use tally_domain as domain;
pub use tally_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Tally tracing initialized.");
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
