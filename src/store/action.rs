use serde::{Deserialize, Serialize};

use crate::bill::{Bill, BillId, Filter};

/// Every state change the store accepts.
///
/// On the wire an action is `{"type": "ADD_BILL", "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddBill(Bill),
    /// Replaces the bill(s) carrying the same id.
    EditBill(Bill),
    RemoveBill(BillId),
    SetFilter(Filter),
    CalculateMinimumBills,
}

impl Action {
    pub const KINDS: [&'static str; 5] = [
        "ADD_BILL",
        "EDIT_BILL",
        "REMOVE_BILL",
        "SET_FILTER",
        "CALCULATE_MINIMUM_BILLS",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddBill(_) => Self::KINDS[0],
            Action::EditBill(_) => Self::KINDS[1],
            Action::RemoveBill(_) => Self::KINDS[2],
            Action::SetFilter(_) => Self::KINDS[3],
            Action::CalculateMinimumBills => Self::KINDS[4],
        }
    }

    /// Decodes the tagged wire form.
    ///
    /// `Ok(None)` for a well-formed object whose `type` is not a known
    /// action; callers treat that as a no-op. Malformed JSON or a bad
    /// payload for a known type is an error.
    pub fn from_json(raw: &str) -> Result<Option<Action>, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let known = value
            .get("type")
            .and_then(|t| t.as_str())
            .is_some_and(|t| Self::KINDS.contains(&t));
        if !known {
            return Ok(None);
        }
        serde_json::from_value(value).map(Some)
    }
}
