//! Persisted settings: value type, actions, pure reducer, and the store
//! that couples transitions to durable storage.

mod state;
mod store;

pub use state::{DEFAULT_COLLECTION_URL, Settings, SettingsAction, reduce};
pub use store::{LoadOutcome, SETTINGS_KEY, SettingsStore, SettingsView};
