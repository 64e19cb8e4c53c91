//! The persisted settings store.

use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::settings::state::{Settings, SettingsAction, reduce};
use crate::storage::{KeyValueStorage, StorageError};
use crate::theme::DarkMode;

/// Storage key the serialized settings live under.
pub const SETTINGS_KEY: &str = "settings";

/// Whether settings were restored from storage or fell back to defaults.
///
/// Surfaced as a typed value so callers (and tests) can distinguish the two
/// instead of inferring it from field contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Persisted settings were found and deserialized.
    Loaded,
    /// Storage was absent or unparsable; defaults were used.
    Defaulted,
}

/// Single-writer store for user settings.
///
/// [`dispatch`](Self::dispatch) applies the pure reducer and then persists
/// the full settings document under [`SETTINGS_KEY`] as an explicit step.
/// The backing storage is injected, so tests substitute an in-memory one.
#[derive(Debug)]
pub struct SettingsStore {
    settings: Settings,
    storage: Box<dyn KeyValueStorage>,
}

impl SettingsStore {
    /// Loads settings from `storage`, falling back to [`Settings::default`].
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the storage itself cannot be read.
    /// Unparsable content is not an error; it yields
    /// [`LoadOutcome::Defaulted`].
    #[instrument(skip(storage))]
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Result<(Self, LoadOutcome), StorageError> {
        Self::load_with_defaults(storage, Settings::default())
    }

    /// Loads settings from `storage`, falling back to `defaults`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the storage itself cannot be read.
    #[instrument(skip(storage, defaults))]
    pub fn load_with_defaults(
        storage: Box<dyn KeyValueStorage>,
        defaults: Settings,
    ) -> Result<(Self, LoadOutcome), StorageError> {
        let (settings, outcome) = match storage.read(SETTINGS_KEY)? {
            Some(raw) => match serde_json::from_str::<Settings>(&raw) {
                Ok(settings) => {
                    debug!("Persisted settings restored");
                    (settings, LoadOutcome::Loaded)
                }
                Err(e) => {
                    warn!(error = %e, "Persisted settings unreadable, using defaults");
                    (defaults, LoadOutcome::Defaulted)
                }
            },
            None => {
                debug!("No persisted settings, using defaults");
                (defaults, LoadOutcome::Defaulted)
            }
        };

        info!(outcome = ?outcome, "Settings store ready");
        Ok((Self { settings, storage }, outcome))
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Applies `action` through the pure reducer, then persists the result.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the transitioned settings cannot be
    /// written back. The in-memory transition has already happened at that
    /// point; the next successful dispatch re-persists the full document.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: SettingsAction) -> Result<(), StorageError> {
        debug!(action = ?action, "Dispatching settings action");
        self.settings = reduce(&self.settings, &action);
        self.persist()
    }

    /// Serializes the full settings document and writes it under the fixed
    /// key. Separate from the reducer so the transition stays pure.
    #[instrument(skip(self))]
    fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.settings)?;
        self.storage.write(SETTINGS_KEY, &raw)?;
        debug!("Settings persisted");
        Ok(())
    }

    /// Composes the read model consumed downstream: persisted settings plus
    /// the externally supplied dark-mode flag.
    #[instrument(skip(self, dark_mode))]
    pub fn view(&self, dark_mode: &dyn DarkMode) -> SettingsView {
        SettingsView {
            name: self.settings.name().clone(),
            is_dark_mode: dark_mode.is_dark(),
            collection_background_url: self.settings.collection_background_url().clone(),
            cached_background_url: self.settings.cached_background_url().clone(),
        }
    }
}

/// Composed read model: settings joined with the dark-mode capability.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    /// Display name.
    name: String,
    /// Current theme flag, supplied by the [`DarkMode`] capability.
    is_dark_mode: bool,
    /// Constant fallback image-collection endpoint.
    collection_background_url: String,
    /// Resolved image URL, empty until fetched.
    cached_background_url: String,
}
