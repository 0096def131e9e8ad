//! tally-storage-json
//!
//! JSON persistence for the ledger: the adapter that mirrors a [`Ledger`]
//! into two key-value slots, and a filesystem backend for those slots.

mod file_store;
mod persistence;

pub use file_store::JsonFileStore;
pub use persistence::{LedgerPersistence, LoadReport};
