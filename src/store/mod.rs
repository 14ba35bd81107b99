pub mod action;
pub mod config;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::Action;
pub use config::{ConfigError, StoreConfig};
pub use reducer::apply;
pub use state::ApplicationState;
pub use store::{Listener, Store, SubscriptionId};
