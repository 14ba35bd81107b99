use crate::types::selection_result::{RankedBill, SelectedBill};

pub struct BudgetResult {
    pub selected: Vec<SelectedBill>,
    pub amount_used: f64,
    pub bills_selected: usize,
    pub bills_excluded_by_budget: usize,
}

/// Single greedy pass over ranked bills.
///
/// A bill is taken while `total + amount <= budget`. The first bill that
/// does not fit ends the pass; it and everything ranked after it count as
/// excluded, even if a later bill would still fit.
pub fn apply_budget(ranked: Vec<RankedBill<'_>>, budget: f64) -> BudgetResult {
    let considered = ranked.len();
    let mut selected = Vec::new();
    let mut amount_used = 0.0;

    for rbill in ranked {
        let amount = rbill.bill.amount;
        if amount_used + amount <= budget {
            amount_used += amount;
            selected.push(SelectedBill {
                id: rbill.bill.id,
                amount,
                running_total: amount_used,
            });
        } else {
            break;
        }
    }

    let bills_selected = selected.len();

    BudgetResult {
        selected,
        amount_used,
        bills_selected,
        bills_excluded_by_budget: considered - bills_selected,
    }
}
