//! Modal stack for overlays drawn on top of the form
//!
//! The survey's own confirmation dialog is driven by `SurveyState`;
//! this stack holds the application-level overlays.

/// An overlay displayed on top of the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Keyboard shortcut reference
    Help,
}

/// A stack of modal overlays
///
/// Only the top modal receives input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<Modal> {
        self.stack.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());
        assert!(stack.is_empty());

        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);
        assert_eq!(stack.top(), Some(Modal::QuitConfirm));

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }
}
