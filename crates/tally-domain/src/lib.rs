//! tally-domain
//!
//! Pure domain models (Budget, Transaction, Ledger).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod budget;
pub mod ledger;
pub mod transaction;

pub use budget::*;
pub use ledger::*;
pub use transaction::*;
