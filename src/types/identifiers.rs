use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::bill::Bill;

/// Lookup and equality key of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(i64);

impl BillId {
    pub const fn new(raw: i64) -> Self {
        BillId(raw)
    }

    /// Millisecond epoch timestamp, the way new bills are keyed when entered by hand.
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        BillId(at.timestamp_millis())
    }

    pub fn now() -> Self {
        Self::from_timestamp(Utc::now())
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BillId {
    fn from(raw: i64) -> Self {
        BillId(raw)
    }
}

/// Content hash of everything a selection pass reads: the bill list
/// (in order) and the budget.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputVersion(String);

impl InputVersion {
    pub fn of(bills: &[Bill], budget: f64) -> Self {
        let mut hasher = Sha256::new();
        for bill in bills {
            hasher.update(bill.id.get().to_be_bytes());
            hash_str(&mut hasher, &bill.description);
            hash_str(&mut hasher, &bill.category);
            hasher.update(bill.amount.to_bits().to_be_bytes());
            hash_str(&mut hasher, &bill.date);
        }
        hasher.update(budget.to_bits().to_be_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        InputVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Length prefix keeps ("ab", "c") and ("a", "bc") apart.
fn hash_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_be_bytes());
    hasher.update(s.as_bytes());
}
