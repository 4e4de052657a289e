//! Survey form component
//!
//! Terminal adapter over `SurveyState`: a focus ring across the controls,
//! per-control key handling, and rendering of values and helper text.
//! All data changes are emitted as Actions and applied in `update`.

use crate::action::Action;
use crate::component::Component;
use crate::model::form::{AGE_HINT, MAX_RATING};
use crate::model::{Choice, Field, FieldChange, Gender, Language, Submission, SurveyState};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Helper text shown under an empty required field after a submit attempt
pub const REQUIRED_HELPER: &str = "* Campo requerido";

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Surname,
    Age,
    Gender,
    Language,
    Rating,
    Terms,
    Submit,
    Clear,
}

impl Focus {
    const ORDER: [Focus; 9] = [
        Focus::Name,
        Focus::Surname,
        Focus::Age,
        Focus::Gender,
        Focus::Language,
        Focus::Rating,
        Focus::Terms,
        Focus::Submit,
        Focus::Clear,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    /// A disabled submit button cannot take focus
    fn is_available(&self, submit_enabled: bool) -> bool {
        *self != Focus::Submit || submit_enabled
    }

    pub fn next(&self, submit_enabled: bool) -> Focus {
        let len = Self::ORDER.len();
        (1..=len)
            .map(|step| Self::ORDER[(self.position() + step) % len])
            .find(|f| f.is_available(submit_enabled))
            .unwrap_or(*self)
    }

    pub fn prev(&self, submit_enabled: bool) -> Focus {
        let len = Self::ORDER.len();
        (1..=len)
            .map(|step| Self::ORDER[(self.position() + len - step) % len])
            .find(|f| f.is_available(submit_enabled))
            .unwrap_or(*self)
    }

    fn of_field(field: Field) -> Focus {
        match field {
            Field::Name => Focus::Name,
            Field::Surname => Focus::Surname,
            Field::Age => Focus::Age,
            Field::Gender => Focus::Gender,
            Field::Language => Focus::Language,
            Field::Rating => Focus::Rating,
            Field::Terms => Focus::Terms,
        }
    }
}

/// Radio group step: moves among the options, never back to "none"
fn step_radio<T: Choice>(current: Option<T>, forward: bool) -> Option<T> {
    let len = T::ALL.len();
    let next = match current {
        None if forward => 0,
        None => len - 1,
        Some(c) if forward => (c.index() + 1) % len,
        Some(c) => (c.index() + len - 1) % len,
    };
    T::ALL.get(next).copied()
}

/// Select step: the placeholder is slot 0, followed by every option
fn step_select<T: Choice>(current: Option<T>, forward: bool) -> Option<T> {
    let slots = T::ALL.len() + 1;
    let slot = current.map(|c| c.index() + 1).unwrap_or(0);
    let next = if forward {
        (slot + 1) % slots
    } else {
        (slot + slots - 1) % slots
    };
    next.checked_sub(1).and_then(|i| T::ALL.get(i).copied())
}

fn label_width() -> usize {
    Field::all()
        .iter()
        .filter(|f| **f != Field::Terms)
        .map(|f| f.label().width() + 2)
        .max()
        .unwrap_or(0)
}

fn padded_label(field: Field) -> String {
    let mut label = field.label().to_string();
    if field.shows_required_marker() {
        label.push_str(" *");
    }
    let pad = label_width().saturating_sub(label.width());
    format!("{}{}", label, " ".repeat(pad))
}

/// The survey form
#[derive(Debug, Default)]
pub struct SurveyForm {
    pub state: SurveyState,
    pub focus: Focus,
    /// Snapshot taken by the most recent submit
    pub last_submission: Option<Submission>,
}

impl SurveyForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit only fires while the button is enabled
    fn submit_action(&self) -> Option<Action> {
        self.state.submit_enabled().then_some(Action::Submit)
    }

    fn handle_text_key(&self, field: Field, key: KeyEvent) -> Option<Action> {
        let data = self.state.data();
        let mut value = match field {
            Field::Name => data.name.clone(),
            Field::Surname => data.surname.clone(),
            Field::Age => data.age.clone(),
            _ => return None,
        };

        match key.code {
            KeyCode::Char(c) => {
                // Number input: digits only
                if field == Field::Age && !c.is_ascii_digit() {
                    return None;
                }
                value.push(c);
            }
            KeyCode::Backspace => {
                value.pop()?;
            }
            KeyCode::Enter => return self.submit_action(),
            _ => return None,
        }

        let change = match field {
            Field::Name => FieldChange::Name(value),
            Field::Surname => FieldChange::Surname(value),
            _ => FieldChange::Age(value),
        };
        Some(Action::ChangeField(change))
    }

    fn handle_rating_key(&self, key: KeyEvent) -> Option<Action> {
        let rating = self.state.data().rating;
        match key.code {
            KeyCode::Left => Some(Action::ChangeRating(Some(rating.saturating_sub(1)))),
            KeyCode::Right => Some(Action::ChangeRating(Some((rating + 1).min(MAX_RATING)))),
            KeyCode::Char(c) => {
                let value = c.to_digit(10).filter(|d| *d <= u32::from(MAX_RATING))? as u8;
                // Picking the current value again clears the widget
                if value == rating {
                    Some(Action::ChangeRating(None))
                } else {
                    Some(Action::ChangeRating(Some(value)))
                }
            }
            KeyCode::Backspace | KeyCode::Delete => Some(Action::ChangeRating(None)),
            _ => None,
        }
    }

    fn handle_control_key(&self, key: KeyEvent) -> Option<Action> {
        let data = self.state.data();
        match self.focus {
            Focus::Name => self.handle_text_key(Field::Name, key),
            Focus::Surname => self.handle_text_key(Field::Surname, key),
            Focus::Age => self.handle_text_key(Field::Age, key),
            Focus::Gender => {
                let gender = match key.code {
                    KeyCode::Left => step_radio(data.gender, false),
                    KeyCode::Right => step_radio(data.gender, true),
                    KeyCode::Char(c) => {
                        let index = (c.to_digit(10)? as usize).checked_sub(1)?;
                        Some(*Gender::ALL.get(index)?)
                    }
                    _ => return None,
                };
                Some(Action::ChangeField(FieldChange::Gender(gender)))
            }
            Focus::Language => {
                let language = match key.code {
                    KeyCode::Left => step_select::<Language>(data.language, false),
                    KeyCode::Right => step_select::<Language>(data.language, true),
                    _ => return None,
                };
                Some(Action::ChangeField(FieldChange::Language(language)))
            }
            Focus::Rating => self.handle_rating_key(key),
            Focus::Terms => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    Some(Action::ChangeField(FieldChange::Terms(!data.terms)))
                }
                _ => None,
            },
            Focus::Submit => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => self.submit_action(),
                _ => None,
            },
            Focus::Clear => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Clear),
                _ => None,
            },
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn marker(&self, focus: Focus) -> Span<'static> {
        if self.focus == focus {
            Span::styled(
                "▶ ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw("  ")
        }
    }

    fn label_style(&self, field: Field) -> Style {
        if self.state.is_invalid(field) {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else if self.focus == Focus::of_field(field) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn value_spans(&self, field: Field) -> Vec<Span<'static>> {
        let data = self.state.data();
        let focused = self.focus == Focus::of_field(field);
        let input_style = if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if focused { "_" } else { "" };

        match field {
            Field::Name => vec![Span::styled(format!("{}{}", data.name, cursor), input_style)],
            Field::Surname => vec![Span::styled(
                format!("{}{}", data.surname, cursor),
                input_style,
            )],
            Field::Age => vec![
                Span::styled(format!("{}{}", data.age, cursor), input_style),
                Span::styled(
                    format!("  ({}-{})", AGE_HINT.0, AGE_HINT.1),
                    Style::default().fg(Color::DarkGray),
                ),
            ],
            Field::Gender => Gender::ALL
                .iter()
                .flat_map(|g| {
                    let selected = data.gender == Some(*g);
                    let (mark, style) = if selected {
                        ("(•) ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    } else {
                        ("( ) ", Style::default().fg(Color::White))
                    };
                    [
                        Span::styled(format!("{}{}", mark, g.label()), style),
                        Span::raw("  "),
                    ]
                })
                .collect(),
            Field::Language => {
                let label = data.language.map(|l| l.label()).unwrap_or("—");
                let text = if focused {
                    format!("‹ {} ›", label)
                } else {
                    format!("  {}  ", label)
                };
                vec![Span::styled(text, input_style)]
            }
            Field::Rating => {
                let filled = usize::from(data.rating);
                let empty = usize::from(MAX_RATING) - filled;
                vec![
                    Span::styled(
                        format!("{}{}", "★".repeat(filled), "☆".repeat(empty)),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(format!("  {}/{}", data.rating, MAX_RATING)),
                ]
            }
            Field::Terms => {
                let checkbox = if data.terms { "[x] " } else { "[ ] " };
                vec![Span::styled(
                    format!("{}{}", checkbox, Field::Terms.label()),
                    if data.terms {
                        Style::default().fg(Color::Green)
                    } else {
                        self.label_style(Field::Terms)
                    },
                )]
            }
        }
    }

    fn helper_line(&self, field: Field) -> Line<'static> {
        if self.state.is_invalid(field) {
            Line::from(vec![
                Span::raw(" ".repeat(label_width() + 3)),
                Span::styled(REQUIRED_HELPER, Style::default().fg(Color::Red)),
            ])
        } else {
            Line::from("")
        }
    }

    fn button(&self, focus: Focus, text: &'static str, enabled: bool) -> Span<'static> {
        let style = if !enabled {
            Style::default().fg(Color::DarkGray)
        } else if self.focus == focus {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };
        Span::styled(text, style)
    }

    /// Build the form body, one line per row
    pub fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];

        for field in [
            Field::Name,
            Field::Surname,
            Field::Age,
            Field::Gender,
            Field::Language,
            Field::Rating,
        ] {
            let mut spans = vec![
                self.marker(Focus::of_field(field)),
                Span::styled(padded_label(field), self.label_style(field)),
                Span::raw(" "),
            ];
            spans.extend(self.value_spans(field));
            lines.push(Line::from(spans));
            lines.push(self.helper_line(field));
        }

        let mut terms = vec![self.marker(Focus::Terms)];
        terms.extend(self.value_spans(Field::Terms));
        lines.push(Line::from(terms));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            self.marker(Focus::Submit),
            self.button(Focus::Submit, "[ ENVIAR ]", self.state.submit_enabled()),
            Span::raw("   "),
            self.marker(Focus::Clear),
            self.button(Focus::Clear, "[ LIMPIAR ]", true),
        ]));

        lines
    }
}

impl Component for SurveyForm {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let action = match key.code {
                KeyCode::Char('s') => self.submit_action(),
                KeyCode::Char('l') => Some(Action::Clear),
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => self.handle_control_key(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNext => self.focus = self.focus.next(self.state.submit_enabled()),
            Action::FocusPrev => self.focus = self.focus.prev(self.state.submit_enabled()),
            Action::ChangeField(change) => self.state.on_field_change(change),
            Action::ChangeRating(value) => self.state.on_rating_change(value),
            Action::Submit => self.last_submission = Some(self.state.on_submit()),
            Action::Clear => self.state.on_clear(),
            Action::ChooseDialog(choice) => self.state.on_dialog_choice(choice),
            _ => {}
        }

        if !self.focus.is_available(self.state.submit_enabled()) {
            self.focus = Focus::Clear;
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let errors = self.state.errors().len();
        let title = match errors {
            0 => " Encuesta ".to_string(),
            1 => " Encuesta · 1 campo requerido ".to_string(),
            n => format!(" Encuesta · {} campos requeridos ", n),
        };

        let paragraph = Paragraph::new(self.build_lines()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(title)
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}
