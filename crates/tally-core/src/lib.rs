//! tally-core
//!
//! Business logic for Tally: the ledger store, its derived aggregates, and
//! the contracts that persistence backends implement.
//! Depends on tally-domain. No CLI, no terminal I/O, no direct file access.

pub mod alerts;
pub mod error;
pub mod ledger_store;
pub mod storage;
pub mod summary;
pub mod time;

pub use alerts::*;
pub use error::*;
pub use ledger_store::*;
pub use storage::*;
pub use summary::*;
pub use time::*;
