pub mod amount;
pub mod bill;
pub mod category;
pub mod draft;

pub use crate::types::identifiers::BillId;
pub use bill::{seed_bills, Bill};
pub use category::{Category, Filter};
pub use draft::{parse_amount, BillDraft, BillInput, InputError};
