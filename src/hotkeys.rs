//! Keyboard boundary: key-combination to command mapping.
//!
//! The host view layer feeds key events in; store-affecting commands are
//! routed to dispatch calls, dialog commands are returned to the host.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, instrument};

use crate::settings::{SettingsAction, SettingsStore};
use crate::storage::StorageError;
use crate::theme::DarkMode;

/// A dialog the host should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// The tic-tac-toe game modal.
    TicTacToe,
    /// The countdown-timer modal.
    Timer,
}

/// A dashboard command triggered by a hotkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Toggle the dark-mode flag (ctrl+D).
    ToggleDarkMode,
    /// Clear the cached background URL, forcing re-resolution (ctrl+B).
    ResetBackground,
    /// Open the tic-tac-toe dialog (ctrl+T).
    OpenTicTacToe,
    /// Open the timer dialog (ctrl+R).
    OpenTimer,
}

impl Command {
    /// Applies this command against the settings store and dark-mode
    /// capability. Dialog commands perform no mutation and are handed back
    /// to the host.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the resulting state cannot be persisted.
    #[instrument(skip(store, dark_mode))]
    pub fn apply(
        self,
        store: &mut SettingsStore,
        dark_mode: &mut dyn DarkMode,
    ) -> Result<Option<Dialog>, StorageError> {
        match self {
            Command::ToggleDarkMode => {
                dark_mode.toggle()?;
                Ok(None)
            }
            Command::ResetBackground => {
                info!("Resetting background URL");
                store.dispatch(SettingsAction::ResetBackgroundUrl)?;
                Ok(None)
            }
            Command::OpenTicTacToe => Ok(Some(Dialog::TicTacToe)),
            Command::OpenTimer => Ok(Some(Dialog::Timer)),
        }
    }
}

/// Maps a key event to a command. Unmapped events yield `None`.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Char('d') => Some(Command::ToggleDarkMode),
        KeyCode::Char('b') => Some(Command::ResetBackground),
        KeyCode::Char('t') => Some(Command::OpenTicTacToe),
        KeyCode::Char('r') => Some(Command::OpenTimer),
        _ => None,
    }
}
