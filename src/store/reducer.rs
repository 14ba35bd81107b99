use crate::selection::select_minimum_bills;

use super::action::Action;
use super::state::ApplicationState;

/// The transition function. Pure and total: never fails, never touches
/// anything but its arguments.
pub fn apply(state: &ApplicationState, action: Action) -> ApplicationState {
    match action {
        Action::AddBill(bill) => {
            let mut bills = Vec::with_capacity(state.bills.len() + 1);
            bills.extend_from_slice(&state.bills);
            bills.push(bill);
            ApplicationState {
                bills,
                ..state.clone()
            }
        }
        Action::EditBill(edited) => ApplicationState {
            bills: state
                .bills
                .iter()
                .map(|bill| {
                    if bill.id == edited.id {
                        edited.clone()
                    } else {
                        bill.clone()
                    }
                })
                .collect(),
            ..state.clone()
        },
        Action::RemoveBill(id) => ApplicationState {
            bills: state.bills.iter().filter(|b| b.id != id).cloned().collect(),
            ..state.clone()
        },
        Action::SetFilter(filter) => ApplicationState {
            filter,
            ..state.clone()
        },
        Action::CalculateMinimumBills => {
            let result = select_minimum_bills(&state.bills, state.monthly_budget);
            ApplicationState {
                highlighted_bills: result.ids(),
                highlighted_from: Some(state.input_version()),
                ..state.clone()
            }
        }
    }
}
