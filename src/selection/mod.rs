pub mod budgeting;
pub mod ranking;

use crate::bill::Bill;
use crate::types::selection_result::{SelectionMetadata, SelectionResult};
pub use budgeting::{apply_budget, BudgetResult};
pub use ranking::{compare_amounts, rank_by_amount};

/// Picks the largest cheapest-first prefix of `bills` whose total stays
/// within `budget`.
///
/// Pure and deterministic: the same bills in the same order with the same
/// budget always give the same result. Not an optimal knapsack.
pub fn select_minimum_bills(bills: &[Bill], budget: f64) -> SelectionResult {
    // 1. Ordering Phase
    let ranked = rank_by_amount(bills);

    // 2. Budgeting Phase
    let BudgetResult {
        selected,
        amount_used,
        bills_selected,
        bills_excluded_by_budget,
    } = apply_budget(ranked, budget);

    debug_assert!(bills_selected == 0 || amount_used <= budget);

    tracing::trace!(
        budget,
        amount_used,
        bills_selected,
        bills_excluded_by_budget,
        "selected bills under budget"
    );

    SelectionResult {
        bills: selected,
        selection: SelectionMetadata {
            budget,
            amount_used,
            bills_considered: bills.len(),
            bills_selected,
            bills_excluded_by_budget,
        },
    }
}
