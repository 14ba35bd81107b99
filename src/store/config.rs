use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bill::{seed_bills, Bill, Filter};

use super::state::ApplicationState;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// How a store starts out. Any field missing from a config document
/// falls back to the [`StoreConfig::v0`] value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    #[serde(with = "crate::bill::amount")]
    pub monthly_budget: f64,
    pub seed_bills: Vec<Bill>,
    pub filter: Filter,
}

impl StoreConfig {
    pub fn v0() -> Self {
        Self {
            monthly_budget: 50_000.0,
            seed_bills: seed_bills(),
            filter: Filter::ALL,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let f = fs::File::open(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "cannot open store config");
            e
        })?;
        let config = serde_json::from_reader(f).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "invalid store config");
            e
        })?;
        Ok(config)
    }

    pub fn initial_state(&self) -> ApplicationState {
        ApplicationState {
            filter: self.filter.clone(),
            ..ApplicationState::new(self.seed_bills.clone(), self.monthly_budget)
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::v0()
    }
}
