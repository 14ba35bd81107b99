use bill_manager::bill::{Bill, BillId};
use bill_manager::store::{apply, Action, ApplicationState};
use bill_manager::types::InputVersion;

#[test]
fn recomputing_without_changes_is_idempotent() {
    let mut state = ApplicationState::seeded();
    state.monthly_budget = 3000.0;

    let once = apply(&state, Action::CalculateMinimumBills);
    let twice = apply(&once, Action::CalculateMinimumBills);

    assert_eq!(once.highlighted_bills, twice.highlighted_bills);
    assert_eq!(once, twice);
}

#[test]
fn removing_a_highlighted_bill_leaves_highlights_stale() {
    let state = apply(&ApplicationState::seeded(), Action::CalculateMinimumBills);
    assert!(!state.highlights_are_stale());

    let removed = apply(&state, Action::RemoveBill(BillId::new(6)));

    assert!(removed.highlighted_bills.contains(&BillId::new(6)));
    assert!(removed.find_bill(BillId::new(6)).is_none());
    assert!(removed.highlights_are_stale());

    let refreshed = apply(&removed, Action::CalculateMinimumBills);
    assert!(!refreshed.highlighted_bills.contains(&BillId::new(6)));
    assert!(!refreshed.highlights_are_stale());
}

#[test]
fn filter_changes_do_not_stale_highlights() {
    let state = apply(&ApplicationState::seeded(), Action::CalculateMinimumBills);
    let filtered = apply(&state, Action::SetFilter("Travel".into()));
    assert!(!filtered.highlights_are_stale());
}

#[test]
fn budget_change_is_detected_but_not_applied() {
    let mut state = apply(&ApplicationState::seeded(), Action::CalculateMinimumBills);
    let before = state.highlighted_bills.clone();

    state.monthly_budget = 1000.0;

    assert!(state.highlights_are_stale());
    assert_eq!(state.highlighted_bills, before);
}

#[test]
fn never_computed_highlights_are_not_stale() {
    let state = ApplicationState::seeded();
    assert!(state.highlighted_from.is_none());
    assert!(!state.highlights_are_stale());
}

#[test]
fn input_version_tracks_order_and_content() {
    let a = Bill::new(1, "ab", "c", 1.0, "01-01-2020");
    let b = Bill::new(2, "a", "bc", 1.0, "01-01-2020");

    let v1 = InputVersion::of(&[a.clone(), b.clone()], 10.0);
    let v2 = InputVersion::of(&[a.clone(), b.clone()], 10.0);
    assert_eq!(v1, v2);
    assert!(v1.as_str().starts_with("sha256:"));
    assert_eq!(v1.as_str().len(), "sha256:".len() + 64);

    assert_ne!(v1, InputVersion::of(&[b.clone(), a.clone()], 10.0));
    assert_ne!(v1, InputVersion::of(&[a.clone(), b.clone()], 11.0));

    let mut shifted = a.clone();
    shifted.description = "a".to_string();
    shifted.category = "bc".to_string();
    assert_ne!(InputVersion::of(&[a], 10.0), InputVersion::of(&[shifted], 10.0));
}

#[test]
fn same_actions_from_same_start_give_identical_json() {
    let actions = vec![
        Action::AddBill(Bill::new(8, "Gym", "Personal Care", 45.0, "02-01-2020")),
        Action::EditBill(Bill::new(2, "Car wash", "Utility", 550.0, "01-06-2020")),
        Action::RemoveBill(BillId::new(4)),
        Action::SetFilter("Utility".into()),
        Action::CalculateMinimumBills,
    ];

    let run = || {
        actions
            .iter()
            .cloned()
            .fold(ApplicationState::seeded(), |state, action| apply(&state, action))
    };

    let json1 = serde_json::to_string_pretty(&run()).unwrap();
    let json2 = serde_json::to_string_pretty(&run()).unwrap();
    assert_eq!(json1, json2, "State output is not deterministic");
}
