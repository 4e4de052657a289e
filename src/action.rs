//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{DialogChoice, FieldChange};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Form Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next control
    FocusNext,
    /// Move focus to the previous control
    FocusPrev,

    // ─────────────────────────────────────────────────────────────────────────
    // Survey
    // ─────────────────────────────────────────────────────────────────────────
    /// Replace the value of one field
    ChangeField(FieldChange),
    /// Rating widget reported a value, or no selection
    ChangeRating(Option<u8>),
    /// Submit the form
    Submit,
    /// Reset the form
    Clear,
    /// Close the confirmation dialog through one of its actions
    ChooseDialog(DialogChoice),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::ChangeField(change) => write!(f, "ChangeField({:?})", change.field()),
            Action::ChangeRating(Some(v)) => write!(f, "ChangeRating({})", v),
            Action::ChangeRating(None) => write!(f, "ChangeRating(cleared)"),
            Action::Submit => write!(f, "Submit"),
            Action::Clear => write!(f, "Clear"),
            Action::ChooseDialog(choice) => write!(f, "ChooseDialog({:?})", choice),
        }
    }
}
