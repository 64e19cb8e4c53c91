//! Background-image URL resolution.
//!
//! The collection endpoint redirects to a concrete image. Resolution issues
//! one GET, follows the redirect, and caches the final URL through the
//! settings store. There is no retry: a failed fetch leaves the cache empty
//! and is visible only through tracing, matching the dashboard's behavior.

use async_trait::async_trait;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument, warn};

use crate::settings::{SettingsAction, SettingsStore};
use crate::storage::StorageError;

/// Background resolution error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Background error: {} at {}:{}", message, file, line)]
pub struct BackgroundError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BackgroundError {
    /// Creates a new background error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for BackgroundError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Request error: {}", err))
    }
}

/// Resolves a collection endpoint to a concrete image URL.
///
/// Injected so tests substitute a fake for the network.
#[async_trait]
pub trait BackgroundSource: std::fmt::Debug + Send + Sync {
    /// Returns the final URL after following the endpoint's redirect.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundError`] if the request fails.
    async fn resolve(&self, collection_url: &str) -> Result<String, BackgroundError>;
}

/// HTTP implementation of [`BackgroundSource`].
#[derive(Debug, Clone, Default)]
pub struct HttpBackgroundSource {
    client: reqwest::Client,
}

impl HttpBackgroundSource {
    /// Creates a source with a fresh HTTP client.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BackgroundSource for HttpBackgroundSource {
    #[instrument(skip(self))]
    async fn resolve(&self, collection_url: &str) -> Result<String, BackgroundError> {
        debug!("Resolving background image");
        let response = self.client.get(collection_url).send().await?;
        let resolved = response.url().to_string();
        info!(url = %resolved, "Background image resolved");
        Ok(resolved)
    }
}

/// Refreshes the cached background URL when it is empty.
///
/// Resolves the collection endpoint once and dispatches
/// [`SettingsAction::SetBackgroundUrl`] with the final URL. Does nothing
/// when a URL is already cached. A failed fetch is logged at `warn` and
/// leaves the cache empty; a resolution that did not redirect is discarded
/// so the literal collection-query URL is never cached.
///
/// Returns whether a new URL was cached.
///
/// # Errors
///
/// Returns [`StorageError`] only when the resolved URL cannot be persisted;
/// fetch failures are not errors.
#[instrument(skip(store, source))]
pub async fn refresh_background(
    store: &mut SettingsStore,
    source: &dyn BackgroundSource,
) -> Result<bool, StorageError> {
    if !store.settings().cached_background_url().is_empty() {
        debug!("Background URL already cached");
        return Ok(false);
    }

    let collection = store.settings().collection_background_url().clone();
    let resolved = match source.resolve(&collection).await {
        Ok(url) => url,
        Err(e) => {
            warn!(error = %e, "Background resolution failed, leaving cache empty");
            return Ok(false);
        }
    };

    if resolved == collection {
        warn!(url = %resolved, "Collection endpoint did not redirect, not caching");
        return Ok(false);
    }

    store.dispatch(SettingsAction::SetBackgroundUrl {
        background_url: resolved,
    })?;
    Ok(true)
}
