use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tally::{
    core::{LedgerStore, ManualClock, MemoryStore, ThresholdAlert},
    domain::{BudgetPeriod, TransactionKind},
    init,
    storage::LedgerPersistence,
};

#[test]
fn ledger_round_trip_smoke() {
    init();

    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
    ));
    let mut store = LedgerStore::new(clock);
    store.set_budget(100.0, BudgetPeriod::Monthly).unwrap();
    store
        .add_transaction(TransactionKind::Expense, 85.0, "Rent", "Deposit")
        .unwrap();
    assert_eq!(store.threshold_alert(), ThresholdAlert::NearLimit);

    let persistence = LedgerPersistence::new(MemoryStore::new());
    persistence.save(store.ledger()).unwrap();
    assert_eq!(&persistence.load(), store.ledger());
}
