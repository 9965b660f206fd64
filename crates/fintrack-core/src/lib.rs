//! fintrack-core
//!
//! Calendar arithmetic, recurring-cost projection, category aggregation and budget rollup,
//! plus the services that mutate a `FinanceState`.
//! Depends on fintrack-domain. No terminal I/O; persistence goes through `KeyValueStore`.

pub mod breakdown;
pub mod calendar;
pub mod error;
pub mod format;
pub mod ids;
pub mod monthly;
pub mod projection;
pub mod recurring_service;
pub mod rollup;
pub mod settings_service;
pub mod storage;
pub mod summary_service;
pub mod time;
pub mod transaction_service;
pub mod validation;

pub use breakdown::*;
pub use calendar::*;
pub use error::CoreError;
pub use format::*;
pub use ids::*;
pub use monthly::*;
pub use projection::*;
pub use recurring_service::*;
pub use rollup::*;
pub use settings_service::*;
pub use storage::*;
pub use summary_service::*;
pub use time::*;
pub use transaction_service::*;
