//! Deterministic bill tracking state store.
//!
//! `bill-manager` keeps a list of expense entries in a single
//! [`store::ApplicationState`], changes it only through the pure
//! [`store::apply`] transition, and picks the bills that fit a monthly
//! budget with a cheapest-first greedy pass. Identical inputs always
//! produce identical outputs.

pub mod bill;
pub mod selection;
pub mod store;
pub mod types;
pub mod view;
