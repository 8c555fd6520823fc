use std::collections::BTreeSet;

use finance_core::{
    core::services::{
        CategoryTotal, FilterService, SummaryService, TransactionDraft, TransactionService,
    },
    domain::{seed::default_transactions, FilterCriteria, Period, Transaction, TransactionKind},
};

mod common;

use common::{at, generated_transactions};

#[test]
fn seed_with_no_filters_produces_expected_report() {
    let now = at(2024, 3, 25, 12, 0, 0);
    let visible =
        FilterService::filter_and_sort(&default_transactions(), &FilterCriteria::default(), now);
    let report = SummaryService::build_report(&visible);

    assert_eq!(visible.len(), 6);
    assert_eq!(report.total_income, 5800.0);
    assert_eq!(report.total_expense, 2000.0);
    assert_eq!(report.balance, 3800.0);
    let highest = report.highest_expense.expect("highest expense");
    assert_eq!(highest.amount(), 1200.0);
    assert_eq!(highest.category(), "Moradia");
    assert_eq!(
        report.dominant_category,
        Some(CategoryTotal {
            category: "Moradia".into(),
            total: 1200.0
        })
    );
}

#[test]
fn seed_search_for_supermercado_finds_groceries() {
    let now = at(2024, 3, 25, 12, 0, 0);
    let visible = FilterService::filter_and_sort(
        &default_transactions(),
        &FilterCriteria::search("supermercado"),
        now,
    );
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].amount(), 450.0);
    assert_eq!(visible[0].category(), "Alimentação");
}

#[test]
fn seed_sorted_newest_first() {
    let now = at(2024, 3, 25, 12, 0, 0);
    let visible =
        FilterService::filter_and_sort(&default_transactions(), &FilterCriteria::default(), now);
    let ids: Vec<u64> = visible.iter().map(Transaction::id).collect();
    assert_eq!(ids, vec![6, 5, 2, 3, 4, 1]);
}

#[test]
fn year_period_boundary() {
    let txs = vec![
        Transaction::new(
            1,
            TransactionKind::Expense,
            99.0,
            "Lazer",
            "Réveillon",
            at(2024, 12, 31, 22, 0, 0),
        )
        .unwrap(),
        Transaction::new(
            2,
            TransactionKind::Expense,
            12.0,
            "Alimentação",
            "Café",
            at(2025, 1, 1, 0, 0, 0),
        )
        .unwrap(),
    ];
    for now in [at(2025, 1, 1, 0, 0, 1), at(2025, 6, 30, 9, 0, 0), at(2025, 12, 31, 23, 0, 0)] {
        let visible = FilterService::filter_and_sort(&txs, &FilterCriteria::period(Period::Year), now);
        let ids: Vec<u64> = visible.iter().map(Transaction::id).collect();
        assert_eq!(ids, vec![2], "now = {now}");
    }
}

#[test]
fn search_and_period_compose() {
    let now = at(2024, 3, 16, 10, 0, 0);
    // Week starting Sunday 2024-03-10.
    let week = FilterService::filter_and_sort(
        &default_transactions(),
        &FilterCriteria::period(Period::Week),
        now,
    );
    let ids: Vec<u64> = week.iter().map(Transaction::id).collect();
    assert_eq!(ids, vec![5, 2, 3]);

    let narrowed = FilterService::filter_and_sort(
        &default_transactions(),
        &FilterCriteria::new("aluguel", Period::Week),
        now,
    );
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].id(), 3);
}

#[test]
fn balance_equals_income_minus_expense() {
    for seed in 0..20 {
        let txs = generated_transactions(200, seed);
        assert_eq!(
            SummaryService::balance(&txs),
            SummaryService::total_income(&txs) - SummaryService::total_expense(&txs),
            "seed {seed}"
        );
    }
}

#[test]
fn transactions_survive_json_and_record_roundtrip() {
    for seed in 0..10 {
        for txn in generated_transactions(100, seed) {
            let json = txn.to_json().expect("serialize transaction");
            assert_eq!(Transaction::from_json(&json).unwrap(), txn, "seed {seed}");
            assert_eq!(
                Transaction::from_record(txn.to_record()).unwrap(),
                txn,
                "seed {seed}"
            );
        }
    }
}

#[test]
fn filter_is_idempotent() {
    let now = at(2024, 11, 20, 12, 0, 0);
    let criteria_set = [
        FilterCriteria::default(),
        FilterCriteria::search("mercado"),
        FilterCriteria::period(Period::Year),
        FilterCriteria::new("lazer", Period::Month),
        FilterCriteria::period(Period::RollingWeek),
    ];
    for seed in 0..5 {
        let txs = generated_transactions(300, seed);
        for criteria in &criteria_set {
            let once = FilterService::filter_and_sort(&txs, criteria, now);
            let twice = FilterService::filter_and_sort(&once, criteria, now);
            assert_eq!(once, twice, "criteria {criteria:?}");
        }
    }
}

#[test]
fn filter_never_mutates_input() {
    let txs = generated_transactions(50, 7);
    let before = txs.clone();
    let _ = FilterService::filter_and_sort(
        &txs,
        &FilterCriteria::period(Period::Month),
        at(2024, 6, 1, 0, 0, 0),
    );
    assert_eq!(txs, before);
}

#[test]
fn grouping_is_complete() {
    for seed in 0..10 {
        let txs = generated_transactions(150, seed);
        let groups = SummaryService::group_by_category(&txs);

        let grouped: BTreeSet<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        let present: BTreeSet<&str> = txs.iter().map(Transaction::category).collect();
        assert_eq!(grouped, present);
        assert_eq!(groups.len(), grouped.len(), "categories must not repeat");

        let grouped_total: f64 = groups
            .iter()
            .map(|g| g.income_total + g.expense_total)
            .sum();
        assert_eq!(
            grouped_total,
            SummaryService::total_income(&txs) + SummaryService::total_expense(&txs)
        );

        let shares: f64 = SummaryService::expense_shares_by_category(&txs)
            .iter()
            .map(|share| share.amount)
            .sum();
        assert_eq!(shares, SummaryService::total_expense(&txs));
    }
}

#[test]
fn empty_collection_behaviour() {
    assert!(SummaryService::highest_expense(&[]).is_none());
    assert!(SummaryService::dominant_category(&[]).is_none());
    assert_eq!(SummaryService::balance(&[]), 0.0);
    assert!(FilterService::filter_and_sort(
        &[],
        &FilterCriteria::search("x"),
        at(2024, 1, 1, 0, 0, 0)
    )
    .is_empty());
}

#[test]
fn create_edit_delete_flow() {
    let txs = default_transactions();
    let txs = TransactionService::add(
        txs,
        TransactionDraft::new(
            TransactionKind::Expense,
            "89,90",
            "Saúde",
            "Farmácia",
            "2024-03-22",
        ),
    )
    .expect("add");
    assert_eq!(txs.last().map(Transaction::id), Some(7));

    let txs = TransactionService::replace(
        txs,
        7,
        TransactionDraft::new(
            TransactionKind::Expense,
            "99.90",
            "Saúde",
            "Farmácia",
            "2024-03-22T18:30:00",
        ),
    )
    .expect("replace");
    let edited = TransactionService::find(&txs, 7).expect("edited transaction");
    assert_eq!(edited.amount(), 99.9);
    assert_eq!(edited.occurred_on(), at(2024, 3, 22, 18, 30, 0));

    let txs = TransactionService::remove(txs, 7).expect("remove");
    assert_eq!(txs, default_transactions());
}
