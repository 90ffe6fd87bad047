//! Persistence adapters - key-value stores and the saved-state layout

mod json_file_store;
mod memory_store;
mod snapshot;

pub use json_file_store::JsonFileStore;
pub use memory_store::InMemoryStore;
pub use snapshot::{SavedState, DAILY_LOGIN_KEY, LEDGER_KEY, LISTINGS_KEY, SALES_KEY};
