//! Tablar core - persisted settings and tic-tac-toe for a new-tab dashboard.
//!
//! Two independent state containers form the core:
//!
//! - **Settings store**: user name, dark-mode flag, and a cached
//!   background-image URL, persisted to key-value storage after every
//!   transition.
//! - **Game state machine**: a 3x3 tic-tac-toe board with turn tracking and
//!   win/tie detection.
//!
//! Both are mutated only through dispatched actions applied by pure
//! reducers; a view layer (out of scope here) reads state and feeds actions
//! in on user input or timers.
//!
//! # Example
//!
//! ```
//! use tablar::{GameAction, GameMachine, MemoryStorage, SettingsAction, SettingsStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (mut store, _outcome) = SettingsStore::load(Box::new(MemoryStorage::new()))?;
//! store.dispatch(SettingsAction::SetName { name: "Ada".to_string() })?;
//!
//! let mut game = GameMachine::new();
//! game.dispatch(GameAction::Move { index: 4 })?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod background;
mod config;
mod game;
mod hotkeys;
mod settings;
mod storage;
mod theme;
mod timer;

// Crate-level exports - Settings store
pub use settings::{
    DEFAULT_COLLECTION_URL, LoadOutcome, SETTINGS_KEY, Settings, SettingsAction, SettingsStore,
    SettingsView, reduce,
};

// Crate-level exports - Storage
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};

// Crate-level exports - Dark mode capability
pub use theme::{DARK_MODE_KEY, DarkMode, StoredDarkMode};

// Crate-level exports - Background resolution
pub use background::{BackgroundError, BackgroundSource, HttpBackgroundSource, refresh_background};

// Crate-level exports - Game state machine
pub use game::{
    Board, GameAction, GameMachine, MoveError, Outcome, Player, Position, Square, check_winner,
    evaluate,
};

// Crate-level exports - Keyboard boundary
pub use hotkeys::{Command, Dialog, command_for};

// Crate-level exports - Countdown timer
pub use timer::{CountdownTimer, DEFAULT_TOTAL};

// Crate-level exports - Configuration
pub use config::{ConfigError, TablarConfig};
