//! Tests for the persisted settings store.

use tablar::{
    DEFAULT_COLLECTION_URL, DarkMode, FileStorage, KeyValueStorage, LoadOutcome, MemoryStorage,
    SETTINGS_KEY, SettingsAction, SettingsStore, StorageError,
};

/// Fake dark-mode capability with a fixed value.
#[derive(Debug)]
struct FakeDarkMode(bool);

impl DarkMode for FakeDarkMode {
    fn is_dark(&self) -> bool {
        self.0
    }

    fn toggle(&mut self) -> Result<bool, StorageError> {
        self.0 = !self.0;
        Ok(self.0)
    }
}

#[test]
fn test_empty_storage_defaults() {
    let (store, outcome) = SettingsStore::load(Box::new(MemoryStorage::new())).expect("load");

    assert_eq!(outcome, LoadOutcome::Defaulted);
    assert!(store.settings().name().is_empty());
    assert_eq!(
        store.settings().collection_background_url(),
        DEFAULT_COLLECTION_URL
    );
    assert!(store.settings().cached_background_url().is_empty());
}

#[test]
fn test_malformed_storage_defaults() {
    let storage = MemoryStorage::new();
    storage.write(SETTINGS_KEY, "not valid json {").expect("write");

    let (store, outcome) = SettingsStore::load(Box::new(storage)).expect("load");

    assert_eq!(outcome, LoadOutcome::Defaulted);
    assert!(store.settings().name().is_empty());
}

#[test]
fn test_set_name_round_trip() {
    let storage = MemoryStorage::new();

    let (mut store, _) = SettingsStore::load(Box::new(storage.clone())).expect("load");
    store
        .dispatch(SettingsAction::SetName {
            name: "Ada".to_string(),
        })
        .expect("dispatch");

    // Reload from the same storage - the full document round-trips.
    let (reloaded, outcome) = SettingsStore::load(Box::new(storage)).expect("reload");
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(reloaded.settings().name(), "Ada");
    assert_eq!(
        reloaded.settings().collection_background_url(),
        DEFAULT_COLLECTION_URL
    );
    assert!(reloaded.settings().cached_background_url().is_empty());
}

#[test]
fn test_persisted_layout_is_camel_case() {
    let storage = MemoryStorage::new();
    let (mut store, _) = SettingsStore::load(Box::new(storage.clone())).expect("load");
    store
        .dispatch(SettingsAction::SetName {
            name: "Ada".to_string(),
        })
        .expect("dispatch");

    let raw = storage.read(SETTINGS_KEY).expect("read").expect("present");
    assert!(raw.contains("\"cachedBackgroundUrl\""));
    assert!(raw.contains("\"collectionBackgroundUrl\""));
}

#[test]
fn test_reset_then_set_background_url() {
    let (mut store, _) = SettingsStore::load(Box::new(MemoryStorage::new())).expect("load");

    store
        .dispatch(SettingsAction::ResetBackgroundUrl)
        .expect("dispatch");
    store
        .dispatch(SettingsAction::SetBackgroundUrl {
            background_url: "https://img/x.png".to_string(),
        })
        .expect("dispatch");
    assert_eq!(store.settings().cached_background_url(), "https://img/x.png");

    store
        .dispatch(SettingsAction::ResetBackgroundUrl)
        .expect("dispatch");
    assert!(store.settings().cached_background_url().is_empty());
}

#[test]
fn test_unknown_action_fails_to_decode_and_mutates_nothing() {
    let (store, _) = SettingsStore::load(Box::new(MemoryStorage::new())).expect("load");
    let before = store.settings().clone();

    let decoded = serde_json::from_str::<SettingsAction>(r#"{"type":"SET_THEME","theme":"sepia"}"#);
    assert!(decoded.is_err());

    assert_eq!(store.settings(), &before);
}

#[test]
fn test_file_storage_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::new(dir.path().join("state"));

    let (mut store, outcome) = SettingsStore::load(Box::new(storage.clone())).expect("load");
    assert_eq!(outcome, LoadOutcome::Defaulted);

    store
        .dispatch(SettingsAction::SetName {
            name: "Grace".to_string(),
        })
        .expect("dispatch");

    let (reloaded, outcome) = SettingsStore::load(Box::new(storage)).expect("reload");
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(reloaded.settings().name(), "Grace");
}

#[test]
fn test_view_composes_dark_mode() {
    let (mut store, _) = SettingsStore::load(Box::new(MemoryStorage::new())).expect("load");
    store
        .dispatch(SettingsAction::SetName {
            name: "Ada".to_string(),
        })
        .expect("dispatch");

    let view = store.view(&FakeDarkMode(true));
    assert_eq!(view.name(), "Ada");
    assert!(*view.is_dark_mode());

    let view = store.view(&FakeDarkMode(false));
    assert!(!*view.is_dark_mode());
}

#[test]
fn test_partial_document_fills_defaults() {
    let storage = MemoryStorage::new();
    storage
        .write(SETTINGS_KEY, r#"{"name":"Ada"}"#)
        .expect("write");

    let (store, outcome) = SettingsStore::load(Box::new(storage)).expect("load");
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(store.settings().name(), "Ada");
    assert_eq!(
        store.settings().collection_background_url(),
        DEFAULT_COLLECTION_URL
    );
}
