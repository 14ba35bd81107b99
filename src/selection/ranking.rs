use std::cmp::Ordering;

use crate::bill::Bill;
use crate::types::selection_result::RankedBill;

/// Orders bills cheapest first.
///
/// Stable, so equal amounts keep their list order. `-0.0` and `0.0` are
/// the same amount. Otherwise IEEE total ordering applies: NaN amounts get
/// a fixed place (positive NaN after +inf, negative NaN before -inf)
/// instead of breaking the sort.
pub fn rank_by_amount(bills: &[Bill]) -> Vec<RankedBill<'_>> {
    let mut ranked: Vec<RankedBill<'_>> = bills
        .iter()
        .enumerate()
        .map(|(position, bill)| RankedBill { bill, position })
        .collect();

    ranked.sort_by(|a, b| compare_amounts(a.bill.amount, b.bill.amount));

    debug_assert!(ranked.windows(2).all(|w| {
        let (a, b) = (&w[0], &w[1]);
        match compare_amounts(a.bill.amount, b.bill.amount) {
            Ordering::Less => true,
            Ordering::Equal => a.position < b.position,
            Ordering::Greater => false,
        }
    }));

    ranked
}

pub fn compare_amounts(a: f64, b: f64) -> Ordering {
    amount_key(a).total_cmp(&amount_key(b))
}

// Folds -0.0 into 0.0.
fn amount_key(amount: f64) -> f64 {
    if amount == 0.0 {
        0.0
    } else {
        amount
    }
}
