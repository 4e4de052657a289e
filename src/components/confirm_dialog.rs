//! Submit confirmation dialog component
//!
//! Shown while the survey's `dialog_open` flag is set. "No", "Sí" and Esc
//! each report their own `DialogChoice`.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::DialogChoice;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Confirmation dialog with two buttons
#[derive(Debug, Default)]
pub struct ConfirmDialog {
    /// Highlighted button; "Sí" has initial focus
    pub selected: DialogChoice,
}

impl ConfirmDialog {
    /// Reset highlight for a new invocation
    pub fn reset(&mut self) {
        self.selected = DialogChoice::Yes;
    }

    fn toggle(&mut self) {
        self.selected = match self.selected {
            DialogChoice::No => DialogChoice::Yes,
            _ => DialogChoice::No,
        };
    }

    fn button(&self, choice: DialogChoice) -> Span<'static> {
        let style = if self.selected == choice {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Span::styled(format!(" {} ", choice.label()), style)
    }
}

impl Component for ConfirmDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.toggle();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ChooseDialog(self.selected)),
            KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::ChooseDialog(DialogChoice::No)),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('y') | KeyCode::Char('Y') => {
                Some(Action::ChooseDialog(DialogChoice::Yes))
            }
            KeyCode::Esc => Some(Action::ChooseDialog(DialogChoice::Backdrop)),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 48, 9);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                "¿Deseas enviar la encuesta?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "(Se han mostrado los datos por consola)",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                self.button(DialogChoice::No),
                Span::raw("    "),
                self.button(DialogChoice::Yes),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Confirmar envío ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_yes_has_initial_focus() {
        let mut dialog = ConfirmDialog::default();
        let action = dialog.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::ChooseDialog(DialogChoice::Yes)));
    }

    #[test]
    fn test_arrow_switches_button() {
        let mut dialog = ConfirmDialog::default();
        assert_eq!(dialog.handle_key_event(key(KeyCode::Left)).unwrap(), None);
        assert_eq!(dialog.selected, DialogChoice::No);

        let action = dialog.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, Some(Action::ChooseDialog(DialogChoice::No)));

        dialog.reset();
        assert_eq!(dialog.selected, DialogChoice::Yes);
    }

    #[test]
    fn test_shortcuts_and_backdrop() {
        let mut dialog = ConfirmDialog::default();
        let cases = [
            (KeyCode::Char('n'), DialogChoice::No),
            (KeyCode::Char('s'), DialogChoice::Yes),
            (KeyCode::Char('y'), DialogChoice::Yes),
            (KeyCode::Esc, DialogChoice::Backdrop),
        ];
        for (code, choice) in cases {
            let action = dialog.handle_key_event(key(code)).unwrap();
            assert_eq!(action, Some(Action::ChooseDialog(choice)));
        }
        assert_eq!(dialog.handle_key_event(key(KeyCode::Char('x'))).unwrap(), None);
    }
}
