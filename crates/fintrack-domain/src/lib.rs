//! fintrack-domain
//!
//! Pure record types for the finance tracker (transactions, recurring expenses, settings).
//! No I/O, no storage, no clock access. Only data types and the helpers that keep them consistent.

pub mod common;
pub mod recurring;
pub mod settings;
pub mod state;
pub mod transaction;

pub use common::*;
pub use recurring::*;
pub use settings::*;
pub use state::*;
pub use transaction::*;
