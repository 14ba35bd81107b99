use thiserror::Error;

use super::bill::Bill;
use crate::types::identifiers::BillId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Bill entry was cancelled")]
    Cancelled,
    #[error("No bill with id {0}")]
    BillNotFound(BillId),
}

/// Everything about a bill except its id, as filled in by the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BillDraft {
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

impl BillDraft {
    /// Pre-fill for editing an existing bill.
    pub fn from_bill(bill: &Bill) -> Self {
        BillDraft {
            description: bill.description.clone(),
            category: bill.category.clone(),
            amount: bill.amount,
            date: bill.date.clone(),
        }
    }

    pub fn into_bill(self, id: BillId) -> Bill {
        Bill {
            id,
            description: self.description,
            category: self.category,
            amount: self.amount,
            date: self.date,
        }
    }
}

/// Source of bill drafts: a dialog, a form, command line arguments, a
/// test fixture. `prefill` is set when an existing bill is being edited.
pub trait BillInput {
    fn collect(&mut self, prefill: Option<&BillDraft>) -> Result<BillDraft, InputError>;
}

impl<F> BillInput for F
where
    F: FnMut(Option<&BillDraft>) -> Result<BillDraft, InputError>,
{
    fn collect(&mut self, prefill: Option<&BillDraft>) -> Result<BillDraft, InputError> {
        self(prefill)
    }
}

/// Lenient amount coercion: parses the longest numeric prefix after leading
/// whitespace (`"12.5 dollars"` is 12.5). Anything without a numeric prefix
/// becomes NaN and is stored as-is.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut e = frac_start;
        while e < len && bytes[e].is_ascii_digit() {
            e += 1;
        }
        mantissa_digits += e - frac_start;
        end = e;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows.
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut e = end + 1;
        if e < len && matches!(bytes[e], b'+' | b'-') {
            e += 1;
        }
        let exp_start = e;
        while e < len && bytes[e].is_ascii_digit() {
            e += 1;
        }
        if e > exp_start {
            end = e;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}
