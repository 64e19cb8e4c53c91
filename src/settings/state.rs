//! Settings value type, actions, and the pure transition function.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Default image-collection endpoint the background URL is resolved from.
///
/// The endpoint redirects to a concrete image; only the final resolved URL
/// is ever cached.
pub const DEFAULT_COLLECTION_URL: &str =
    "https://source.unsplash.com/collection/3802293/1600x900";

/// Persisted user settings.
///
/// Serialized as camelCase JSON so documents written by earlier versions of
/// the dashboard load unchanged. Missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Display name, empty until the user sets one.
    name: String,
    /// Constant fallback image-collection endpoint.
    collection_background_url: String,
    /// Resolved image URL, empty until fetched.
    ///
    /// Invariant: either empty or a previously resolved URL - never the
    /// literal collection-query URL.
    cached_background_url: String,
}

impl Settings {
    /// Creates default settings with a custom collection endpoint.
    #[instrument(skip(url))]
    pub fn with_collection_url(url: impl Into<String>) -> Self {
        Self {
            collection_background_url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: String::new(),
            collection_background_url: DEFAULT_COLLECTION_URL.to_string(),
            cached_background_url: String::new(),
        }
    }
}

/// A settings mutation request.
///
/// Actions are tagged domain events (`{"type": "SET_NAME", ...}`). The enum
/// is closed: an action with an unrecognized tag fails to decode at the
/// serde boundary, which is the caller/reducer contract violation signal -
/// state is never touched by an unknown action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum SettingsAction {
    /// Replaces the display name. Empty names are allowed.
    SetName {
        /// The new display name.
        name: String,
    },
    /// Caches the resolved background-image URL.
    SetBackgroundUrl {
        /// The final URL after the collection endpoint redirected.
        background_url: String,
    },
    /// Clears the cached background URL, forcing re-resolution.
    ResetBackgroundUrl,
}

/// Pure settings reducer: maps current state and an action to the next state.
///
/// Performs no I/O; persistence is an explicit, separate step owned by
/// [`SettingsStore::dispatch`](crate::SettingsStore::dispatch).
#[instrument]
pub fn reduce(state: &Settings, action: &SettingsAction) -> Settings {
    match action {
        SettingsAction::SetName { name } => Settings {
            name: name.clone(),
            ..state.clone()
        },
        SettingsAction::SetBackgroundUrl { background_url } => Settings {
            cached_background_url: background_url.clone(),
            ..state.clone()
        },
        SettingsAction::ResetBackgroundUrl => Settings {
            cached_background_url: String::new(),
            ..state.clone()
        },
    }
}
