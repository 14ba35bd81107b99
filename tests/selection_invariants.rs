use std::cmp::Ordering;

use bill_manager::bill::{parse_amount, seed_bills, Bill, BillId};
use bill_manager::selection::{apply_budget, compare_amounts, rank_by_amount, select_minimum_bills};

fn make_bill(id: i64, amount: f64) -> Bill {
    Bill::new(id, format!("bill {id}"), "Utility", amount, "01-01-2020")
}

fn raw_ids(ids: &[BillId]) -> Vec<i64> {
    ids.iter().map(|id| id.get()).collect()
}

/// Reference greedy prefix, written out independently of the crate.
fn expected_prefix(bills: &[Bill], budget: f64) -> Vec<i64> {
    let mut sorted: Vec<&Bill> = bills.iter().collect();
    let key = |x: f64| if x == 0.0 { 0.0 } else { x };
    sorted.sort_by(|a, b| key(a.amount).total_cmp(&key(b.amount)));
    let mut total = 0.0;
    let mut out = Vec::new();
    for bill in sorted {
        if total + bill.amount > budget || (total + bill.amount).is_nan() {
            break;
        }
        total += bill.amount;
        out.push(bill.id.get());
    }
    out
}

#[test]
fn invariant_selection_is_bounded_and_is_the_greedy_prefix() {
    let bills = seed_bills();

    for budget in [0.0, 319.0, 320.0, 749.0, 750.0, 1000.0, 5480.0, 44_809.0, 50_000.0, 1e9] {
        let result = select_minimum_bills(&bills, budget);

        let selected_sum: f64 = result
            .ids()
            .iter()
            .map(|id| bills.iter().find(|b| b.id == *id).unwrap().amount)
            .sum();

        assert!(selected_sum <= budget, "budget {budget} exceeded: {selected_sum}");
        assert_eq!(selected_sum, result.selection.amount_used);
        assert_eq!(raw_ids(&result.ids()), expected_prefix(&bills, budget));
        assert_eq!(
            result.selection.bills_selected + result.selection.bills_excluded_by_budget,
            result.selection.bills_considered
        );
    }
}

#[test]
fn empty_bill_list_selects_nothing() {
    let result = select_minimum_bills(&[], 100.0);
    assert!(result.bills.is_empty());
    assert_eq!(result.selection.bills_considered, 0);
    assert_eq!(result.selection.amount_used, 0.0);
}

#[test]
fn zero_or_negative_budget_only_takes_non_positive_amounts() {
    let bills = vec![make_bill(1, 5.0), make_bill(2, 0.0)];
    assert_eq!(raw_ids(&select_minimum_bills(&bills, 0.0).ids()), vec![2]);

    let bills = vec![make_bill(1, 3.0), make_bill(2, 4.0)];
    assert!(select_minimum_bills(&bills, -1.0).bills.is_empty());

    let bills = vec![make_bill(1, 3.0), make_bill(2, -20.0)];
    assert_eq!(raw_ids(&select_minimum_bills(&bills, -10.0).ids()), vec![2, 1]);
}

#[test]
fn exact_fit_is_included() {
    let bills = vec![make_bill(1, 600.0), make_bill(2, 400.0)];
    let result = select_minimum_bills(&bills, 1000.0);
    assert_eq!(raw_ids(&result.ids()), vec![2, 1]);
    assert_eq!(result.selection.amount_used, 1000.0);
}

#[test]
fn equal_amounts_keep_list_order() {
    let bills = vec![make_bill(10, 5.0), make_bill(11, 5.0), make_bill(12, 1.0), make_bill(13, 5.0)];

    let ranked: Vec<i64> = rank_by_amount(&bills).iter().map(|r| r.bill.id.get()).collect();
    assert_eq!(ranked, vec![12, 10, 11, 13]);

    let result = select_minimum_bills(&bills, 11.0);
    assert_eq!(raw_ids(&result.ids()), vec![12, 10, 11]);
}

#[test]
fn signed_zeros_are_equal_amounts() {
    let bills = vec![make_bill(1, 0.0), make_bill(2, -0.0), make_bill(3, -1.0), make_bill(4, 0.0)];

    let ranked: Vec<i64> = rank_by_amount(&bills).iter().map(|r| r.bill.id.get()).collect();
    assert_eq!(ranked, vec![3, 1, 2, 4]);

    let result = select_minimum_bills(&bills, 10.0);
    assert_eq!(raw_ids(&result.ids()), vec![3, 1, 2, 4]);
    assert_eq!(raw_ids(&result.ids()), expected_prefix(&bills, 10.0));

    let coerced = vec![make_bill(1, 0.0), make_bill(2, parse_amount("-0"))];
    assert_eq!(raw_ids(&select_minimum_bills(&coerced, 10.0).ids()), vec![1, 2]);
    assert_eq!(compare_amounts(0.0, -0.0), Ordering::Equal);
}

#[test]
fn pass_stops_instead_of_skipping() {
    // Negative NaN ranks first; NaN never compares <= so the pass ends at
    // once although every other bill would fit.
    let bills = vec![make_bill(1, 10.0), make_bill(2, -f64::NAN), make_bill(3, 20.0)];

    let result = select_minimum_bills(&bills, 100.0);

    assert!(result.bills.is_empty());
    assert_eq!(result.selection.bills_excluded_by_budget, 3);
}

#[test]
fn nan_amount_ranks_last_and_ends_the_pass() {
    let bills = vec![make_bill(1, 10.0), make_bill(2, f64::NAN), make_bill(3, 20.0)];

    let ranked: Vec<i64> = rank_by_amount(&bills).iter().map(|r| r.bill.id.get()).collect();
    assert_eq!(ranked, vec![1, 3, 2]);

    let result = select_minimum_bills(&bills, 100.0);
    assert_eq!(raw_ids(&result.ids()), vec![1, 3]);
    assert_eq!(result.selection.amount_used, 30.0);
    assert_eq!(result.selection.bills_excluded_by_budget, 1);
}

#[test]
fn apply_budget_reports_running_totals() {
    let bills = vec![make_bill(1, 1.5), make_bill(2, 2.5), make_bill(3, 100.0)];

    let result = apply_budget(rank_by_amount(&bills), 10.0);

    let totals: Vec<f64> = result.selected.iter().map(|s| s.running_total).collect();
    assert_eq!(totals, vec![1.5, 4.0]);
    assert_eq!(result.amount_used, 4.0);
    assert_eq!(result.bills_selected, 2);
    assert_eq!(result.bills_excluded_by_budget, 1);
}
