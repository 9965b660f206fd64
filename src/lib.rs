#![doc(test(attr(deny(warnings))))]

//! fintrack keeps a personal income/expense ledger with recurring obligations and projects
//! them against a monthly budget.
//!
//! The member crates are re-exported: `domain` (records), `services` (calculations and
//! mutations), `storage` (JSON file store) and `config`.

pub mod errors;
pub mod tracker;
pub mod utils;

pub use errors::{Result, TrackerError};
pub use fintrack_config as config;
pub use fintrack_core as services;
pub use fintrack_domain as domain;
pub use fintrack_storage_json as storage;
pub use tracker::FinanceTracker;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("fintrack tracing initialized.");
    });
}
