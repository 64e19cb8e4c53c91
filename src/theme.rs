//! Dark-mode capability.
//!
//! The theme flag is supplied by an external capability rather than the
//! settings reducer: consumers see it in the composed
//! [`SettingsView`](crate::SettingsView), but it is toggled through this
//! trait and persisted under its own key.

use tracing::{debug, info, instrument, warn};

use crate::storage::{KeyValueStorage, StorageError};

/// Storage key the dark-mode flag lives under.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Injected dark-mode capability: a current value and a toggle.
///
/// Substitutable with a fake in tests.
pub trait DarkMode: std::fmt::Debug {
    /// Returns whether dark mode is currently enabled.
    fn is_dark(&self) -> bool;

    /// Flips the flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the new value cannot be persisted.
    fn toggle(&mut self) -> Result<bool, StorageError>;
}

/// Dark-mode flag persisted in key-value storage.
#[derive(Debug)]
pub struct StoredDarkMode {
    enabled: bool,
    storage: Box<dyn KeyValueStorage>,
}

impl StoredDarkMode {
    /// Loads the flag from `storage`, defaulting to light mode when the key
    /// is absent or unparsable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the storage itself cannot be read.
    #[instrument(skip(storage))]
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Result<Self, StorageError> {
        let enabled = match storage.read(DARK_MODE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Persisted dark-mode flag unreadable, defaulting to light");
                false
            }),
            None => false,
        };
        debug!(enabled, "Dark-mode flag loaded");
        Ok(Self { enabled, storage })
    }
}

impl DarkMode for StoredDarkMode {
    fn is_dark(&self) -> bool {
        self.enabled
    }

    #[instrument(skip(self))]
    fn toggle(&mut self) -> Result<bool, StorageError> {
        self.enabled = !self.enabled;
        let raw = serde_json::to_string(&self.enabled)?;
        self.storage.write(DARK_MODE_KEY, &raw)?;
        info!(enabled = self.enabled, "Dark mode toggled");
        Ok(self.enabled)
    }
}
