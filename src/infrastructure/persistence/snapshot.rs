//! Saved-state layout - what goes into the key-value store, under which keys
//!
//! The keys mirror the browser local-storage layout the presentation layer
//! expects: the ledger as an id→quantity map, listings as an array, the
//! sales log as an array, and the daily login state as a small object.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::outbound::{StatePort, StoreError};
use crate::domain::entities::{DailyLoginState, ListingBook, Listing, OwnershipLedger, SaleRecord};
use crate::infrastructure::state::AppState;

pub const LEDGER_KEY: &str = "stickerdex.ledger";
pub const LISTINGS_KEY: &str = "stickerdex.listings";
pub const SALES_KEY: &str = "stickerdex.sales";
pub const DAILY_LOGIN_KEY: &str = "stickerdex.daily_login";

/// Everything the engine persists between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub ledger: OwnershipLedger,
    pub listings: Vec<Listing>,
    pub sales: Vec<SaleRecord>,
    pub daily_login: DailyLoginState,
}

impl SavedState {
    /// Snapshot the mutable state of a running engine.
    pub fn capture(state: &AppState) -> Self {
        let (listings, sales) = state.market.snapshot().into_parts();
        Self {
            ledger: state.inventory.snapshot(),
            listings,
            sales,
            daily_login: state.rewards.snapshot(),
        }
    }

    /// Write every section under its fixed key.
    pub fn persist(&self, store: &dyn StatePort) -> Result<(), StoreError> {
        store.put(LEDGER_KEY, to_value(&self.ledger)?)?;
        store.put(LISTINGS_KEY, to_value(&self.listings)?)?;
        store.put(SALES_KEY, to_value(&self.sales)?)?;
        store.put(DAILY_LOGIN_KEY, to_value(&self.daily_login)?)
    }

    /// Read every section, falling back to empty defaults for absent keys
    /// (a fresh profile has none of them).
    pub fn hydrate(store: &dyn StatePort) -> Result<Self, StoreError> {
        Ok(Self {
            ledger: get_or_default(store, LEDGER_KEY)?,
            listings: get_or_default(store, LISTINGS_KEY)?,
            sales: get_or_default(store, SALES_KEY)?,
            daily_login: get_or_default(store, DAILY_LOGIN_KEY)?,
        })
    }

    /// Load this snapshot into a running engine.
    pub fn apply(self, state: &AppState) {
        state.inventory.restore(self.ledger);
        state
            .market
            .restore(ListingBook::from_parts(self.listings, self.sales));
        state.rewards.restore(self.daily_login);
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(value).map_err(|error| StoreError::Serialization(error.to_string()))
}

fn get_or_default<T>(store: &dyn StatePort, key: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    match store.get(key)? {
        Some(value) => serde_json::from_value(value)
            .map_err(|error| StoreError::Serialization(error.to_string())),
        None => Ok(T::default()),
    }
}
