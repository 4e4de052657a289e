//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub form: Rect,
    pub status: Option<Rect>,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout: form + (optional status) + help bar
pub fn calculate_main_layout(area: Rect, has_status: bool) -> MainLayout {
    if has_status {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area);
        MainLayout {
            form: chunks[0],
            status: Some(chunks[1]),
            help: chunks[2],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);
        MainLayout {
            form: chunks[0],
            status: None,
            help: chunks[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_fits_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(20, 7, 40, 10));

        let small = Rect::new(0, 0, 30, 5);
        let popup = centered_popup(small, 40, 10);
        assert_eq!(popup.width, 30);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_main_layout_with_status() {
        let layout = calculate_main_layout(Rect::new(0, 0, 80, 30), true);
        assert_eq!(layout.help.height, 3);
        assert_eq!(layout.status.map(|s| s.height), Some(1));
        assert_eq!(layout.form.height, 26);

        let layout = calculate_main_layout(Rect::new(0, 0, 80, 30), false);
        assert!(layout.status.is_none());
        assert_eq!(layout.form.height, 27);
    }
}
