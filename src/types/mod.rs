pub mod identifiers;
pub mod selection_result;

pub use identifiers::{BillId, InputVersion};
pub use selection_result::{RankedBill, SelectedBill, SelectionMetadata, SelectionResult};
