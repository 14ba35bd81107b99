use serde::{Deserialize, Serialize};

use crate::bill::{seed_bills, Bill, BillId, Filter};
use crate::types::identifiers::InputVersion;

/// The single aggregate root. Replaced as a whole on every transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationState {
    /// Insertion order. Ids are expected to be unique but never checked.
    pub bills: Vec<Bill>,
    pub filter: Filter,
    #[serde(with = "crate::bill::amount")]
    pub monthly_budget: f64,
    /// Last computed selection, in selection order. Not refreshed when
    /// `bills` change; see [`ApplicationState::highlights_are_stale`].
    pub highlighted_bills: Vec<BillId>,
    /// Inputs the current highlights were computed from.
    #[serde(default)]
    pub highlighted_from: Option<InputVersion>,
}

impl ApplicationState {
    pub fn new(bills: Vec<Bill>, monthly_budget: f64) -> Self {
        ApplicationState {
            bills,
            filter: Filter::ALL,
            monthly_budget,
            highlighted_bills: Vec::new(),
            highlighted_from: None,
        }
    }

    /// Seven fixed bills and a budget of 50000.
    pub fn seeded() -> Self {
        Self::new(seed_bills(), 50_000.0)
    }

    /// First bill with `id`, if any.
    pub fn find_bill(&self, id: BillId) -> Option<&Bill> {
        self.bills.iter().find(|b| b.id == id)
    }

    pub fn input_version(&self) -> InputVersion {
        InputVersion::of(&self.bills, self.monthly_budget)
    }

    /// True when highlights exist and the bills or budget changed since
    /// they were computed. Detection only, nothing is cleared.
    pub fn highlights_are_stale(&self) -> bool {
        match &self.highlighted_from {
            Some(version) => *version != self.input_version(),
            None => false,
        }
    }
}

impl Default for ApplicationState {
    fn default() -> Self {
        Self::seeded()
    }
}
