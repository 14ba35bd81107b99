// Single writer: every change goes through `dispatch`, which swaps in the
// state produced by `apply` and then notifies listeners in order.

use std::fmt;

use crate::bill::{BillDraft, BillId, BillInput, InputError};

use super::action::Action;
use super::config::StoreConfig;
use super::reducer::apply;
use super::state::ApplicationState;

pub type Listener = Box<dyn FnMut(&ApplicationState)>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct Store {
    state: ApplicationState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Store {
    pub fn new(state: ApplicationState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.initial_state())
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn into_state(self) -> ApplicationState {
        self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        self.state = apply(&self.state, action);
        tracing::debug!(
            action = kind,
            bills = self.state.bills.len(),
            highlighted = self.state.highlighted_bills.len(),
            "dispatched"
        );
        self.notify();
    }

    /// Dispatches an action in its `{type, payload}` wire form. An unknown
    /// `type` leaves the state as it is but still notifies listeners.
    pub fn dispatch_json(&mut self, raw: &str) -> Result<(), serde_json::Error> {
        match Action::from_json(raw)? {
            Some(action) => self.dispatch(action),
            None => {
                tracing::debug!("ignored unknown action");
                self.notify();
            }
        }
        Ok(())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ApplicationState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Collects a new bill from `input` and adds it under a fresh
    /// timestamp id.
    pub fn add_from(&mut self, input: &mut impl BillInput) -> Result<BillId, InputError> {
        let draft = input.collect(None)?;
        let id = self.fresh_id();
        self.dispatch(Action::AddBill(draft.into_bill(id)));
        Ok(id)
    }

    /// Collects an edit of bill `id`, pre-filled with its current fields.
    pub fn edit_from(&mut self, id: BillId, input: &mut impl BillInput) -> Result<(), InputError> {
        let current = self.state.find_bill(id).ok_or(InputError::BillNotFound(id))?;
        let prefill = BillDraft::from_bill(current);
        let draft = input.collect(Some(&prefill))?;
        self.dispatch(Action::EditBill(draft.into_bill(id)));
        Ok(())
    }

    // Two adds inside the same millisecond would otherwise share an id.
    fn fresh_id(&self) -> BillId {
        let candidate = BillId::now();
        if self.state.find_bill(candidate).is_none() {
            return candidate;
        }
        let max = self
            .state
            .bills
            .iter()
            .map(|b| b.id.get())
            .max()
            .unwrap_or(candidate.get());
        BillId::new(max.saturating_add(1))
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(ApplicationState::seeded())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
