#![doc(test(attr(deny(warnings))))]

//! Fineasy is a personal finance tracker: record inflows and outflows, keep
//! them in a local JSON slot, and review totals and category breakdowns.

pub mod cli;
pub mod errors;
pub mod utils;

pub use fineasy_config as config;
pub use fineasy_core as services;
pub use fineasy_domain as domain;
pub use fineasy_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Fineasy tracing initialized.");
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
