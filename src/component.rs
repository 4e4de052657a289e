//! Component trait - Interface for UI components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// The pattern follows:
/// 1. `handle_key_event` - Convert key presses to Actions
/// 2. `update` - Process Actions and update state
/// 3. `draw` - Render the component
pub trait Component {
    /// Handle a key event, returning an optional Action
    ///
    /// Components may adjust purely visual state here (focus, scroll),
    /// but data changes go through the returned Action.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// Can return a follow-up Action for the main loop to process.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    ///
    /// This method should be pure rendering - no state changes.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
