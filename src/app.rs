//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that routes key events to whichever layer is on top (modal, confirmation
//! dialog, form) and forwards survey actions to the form.

use crate::action::Action;
use crate::component::Component;
use crate::components::{calculate_main_layout, ConfirmDialog, HelpDialog, QuitDialog, SurveyForm};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    pub config: Config,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Ticks left before the status message is cleared
    status_ticks_left: u16,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub form: SurveyForm,
    pub confirm_dialog: ConfirmDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl App {
    pub fn new(config: Config) -> App {
        App {
            config,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            status_ticks_left: 0,
            form: SurveyForm::new(),
            confirm_dialog: ConfirmDialog::default(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_ticks_left = self.config.status_ticks;
    }

    fn handle_modal_key_event(&mut self, modal: Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area),
            Modal::Help => self.help_dialog.draw(frame, area),
        }
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan);
        let mut spans = Vec::new();
        for (key, label) in [
            ("Tab", "Siguiente"),
            ("←/→", "Cambiar"),
            ("Ctrl+S", "Enviar"),
            ("Ctrl+L", "Limpiar"),
            ("F1", "Ayuda"),
            ("Esc", "Salir"),
        ] {
            spans.push(Span::styled(format!(" {} ", key), key_style));
            spans.push(Span::raw(format!("{}  ", label)));
        }

        let help = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(help, area);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::OpenQuitDialog));
        }

        if let Some(modal) = self.modals.top() {
            return self.handle_modal_key_event(modal, key);
        }

        if key.code == KeyCode::F(1) {
            return Ok(Some(Action::OpenHelp));
        }

        if self.form.state.dialog_open() {
            self.confirm_dialog.handle_key_event(key)
        } else {
            self.form.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                if self.status_message.is_some() {
                    self.status_ticks_left = self.status_ticks_left.saturating_sub(1);
                    if self.status_ticks_left == 0 {
                        self.status_message = None;
                    }
                }
            }
            Action::ForceQuit => {
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                if self.modals.top() != Some(Modal::QuitConfirm) {
                    self.modals.push(Modal::QuitConfirm);
                }
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
            Action::ConfirmModal => {
                if self.modals.top() == Some(Modal::QuitConfirm) {
                    return Ok(Some(Action::ForceQuit));
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Survey (delegate to SurveyForm)
            // ─────────────────────────────────────────────────────────────────
            Action::Submit => {
                self.confirm_dialog.reset();
                self.form.update(Action::Submit)?;
                if let Some(submission) = &self.form.last_submission {
                    let message = format!("Encuesta enviada a las {}", submission.formatted_time());
                    self.set_status(message);
                }
            }
            Action::FocusNext
            | Action::FocusPrev
            | Action::ChangeField(_)
            | Action::ChangeRating(_)
            | Action::Clear
            | Action::ChooseDialog(_) => {
                return self.form.update(action);
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_main_layout(area, self.status_message.is_some());

        self.form.draw(frame, layout.form)?;

        if let (Some(status_area), Some(message)) = (layout.status, &self.status_message) {
            let status = Paragraph::new(Span::styled(
                format!(" {}", message),
                Style::default().fg(Color::Green),
            ));
            frame.render_widget(status, status_area);
        }

        self.draw_help_bar(frame, layout.help);

        if self.form.state.dialog_open() {
            self.confirm_dialog.draw(frame, area)?;
        }

        if let Some(modal) = self.modals.top() {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}
