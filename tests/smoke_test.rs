use finance_core::{
    core::time::FixedClock,
    domain::seed::default_transactions,
    init,
    storage::{PersistenceAdapter, DARK_MODE_KEY},
    FilterCriteria, FilterService, Period, SummaryService,
};

mod common;

#[test]
fn session_without_storage_smoke() {
    init();

    let adapter = PersistenceAdapter::unavailable();
    let txs = adapter.load_transactions_or_seed();
    let dark_mode = adapter.load_preference(DARK_MODE_KEY, false);
    assert!(!dark_mode);

    let clock = FixedClock::new(common::at(2024, 3, 31, 18, 0, 0));
    let visible = FilterService::apply(&txs, &FilterCriteria::period(Period::Month), &clock);
    let report = SummaryService::build_report(&visible);

    assert_eq!(visible.len(), default_transactions().len());
    assert_eq!(report.balance, 3800.0);
    assert!(!adapter.save_transactions(&txs));
}
