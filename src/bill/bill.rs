use serde::{Deserialize, Serialize};

use crate::types::identifiers::BillId;

/// One expense record.
///
/// Fields are stored exactly as supplied. Category is an open string,
/// `amount` may be any f64 (including NaN from a failed coercion) and
/// `date` is expected as `MM-DD-YYYY` but never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub description: String,
    pub category: String,
    #[serde(with = "crate::bill::amount")]
    pub amount: f64,
    pub date: String,
}

impl Bill {
    pub fn new(
        id: i64,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: impl Into<String>,
    ) -> Self {
        Bill {
            id: BillId::new(id),
            description: description.into(),
            category: category.into(),
            amount,
            date: date.into(),
        }
    }
}

/// The fixed list every fresh state starts from.
pub fn seed_bills() -> Vec<Bill> {
    vec![
        Bill::new(1, "Dominoes", "FoodNDining", 430.0, "01-02-2020"),
        Bill::new(2, "Car wash", "Utility", 500.0, "01-06-2020"),
        Bill::new(3, "Amazon", "Shopping", 2030.0, "01-07-2020"),
        Bill::new(4, "House rent", "FoodNDining", 35900.0, "01-03-2020"),
        Bill::new(5, "Tuition", "Education", 2200.0, "01-12-2020"),
        Bill::new(6, "Laundry", "Personal Care", 320.0, "01-14-2020"),
        Bill::new(7, "Vacation", "Travel", 3430.0, "01-18-2020"),
    ]
}
