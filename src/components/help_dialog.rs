//! Help dialog component
//!
//! Displays the keyboard shortcuts of the form.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Help dialog showing all keyboard shortcuts
#[derive(Debug, Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin,
            area.y + margin,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(margin * 2),
        );

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Atajos de teclado ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

/// Build the help content with all keyboard shortcuts
fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.chars().count() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Navegación");
    add_shortcut(&mut lines, "Tab / ↓", "Siguiente campo");
    add_shortcut(&mut lines, "Shift+Tab / ↑", "Campo anterior");

    add_section(&mut lines, "Campos");
    add_shortcut(&mut lines, "Texto", "Escribir / Backspace para borrar");
    add_shortcut(&mut lines, "← / →", "Cambiar opción, lenguaje o valoración");
    add_shortcut(&mut lines, "1-3", "Elegir género");
    add_shortcut(&mut lines, "0-5", "Valoración (repetir para quitarla)");
    add_shortcut(&mut lines, "Espacio", "Marcar / desmarcar condiciones");

    add_section(&mut lines, "Formulario");
    add_shortcut(&mut lines, "Ctrl+S", "Enviar (requiere aceptar condiciones)");
    add_shortcut(&mut lines, "Ctrl+L", "Limpiar");
    add_shortcut(&mut lines, "F1", "Mostrar esta ayuda");
    add_shortcut(&mut lines, "Esc / Ctrl+C", "Salir");

    add_section(&mut lines, "Confirmación");
    add_shortcut(&mut lines, "← / →", "Elegir botón");
    add_shortcut(&mut lines, "Enter", "Pulsar botón");
    add_shortcut(&mut lines, "s / n", "Sí / No");
    add_shortcut(&mut lines, "Esc", "Cerrar");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Pulsa Esc o F1 para cerrar",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}
