use serde::{Deserialize, Serialize};

use crate::bill::Bill;
use crate::types::identifiers::BillId;

/// A bill that made it under the budget, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedBill {
    pub id: BillId,
    #[serde(with = "crate::bill::amount")]
    pub amount: f64,
    /// Sum of this and every earlier selected amount.
    #[serde(with = "crate::bill::amount")]
    pub running_total: f64,
}

/// Metadata describing the outcome of the selection pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionMetadata {
    #[serde(with = "crate::bill::amount")]
    pub budget: f64,
    #[serde(with = "crate::bill::amount")]
    pub amount_used: f64,

    pub bills_considered: usize,
    pub bills_selected: usize,
    pub bills_excluded_by_budget: usize,
}

/// The result of one greedy selection pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub bills: Vec<SelectedBill>,
    pub selection: SelectionMetadata,
}

impl SelectionResult {
    /// Selected ids in selection (ascending amount) order.
    pub fn ids(&self) -> Vec<BillId> {
        self.bills.iter().map(|b| b.id).collect()
    }
}

/// Internal: a bill positioned by the ranking phase, not yet budgeted.
/// Borrows the bill to avoid cloning text fields.
#[derive(Debug, Clone, Copy)]
pub struct RankedBill<'a> {
    pub bill: &'a Bill,
    /// Position in the unsorted bill list.
    pub position: usize,
}
