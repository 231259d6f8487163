use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub struct AppLayout {
    pub canvas: Rect,
    pub status_bar: Option<Rect>,
}

pub fn compute_layout(area: Rect, show_status_bar: bool) -> AppLayout {
    if !show_status_bar {
        return AppLayout {
            canvas: area,
            status_bar: None,
        };
    }

    // Main vertical split: canvas | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Canvas
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        canvas: chunks[0],
        status_bar: Some(chunks[1]),
    }
}

/// Box for an element's text, centered in `canvas`: one cell of padding on
/// each side plus a border, clamped to the canvas.
pub fn element_rect(canvas: Rect, text: &str) -> Rect {
    let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let width = text_width.saturating_add(4).min(canvas.width);
    let height = 3.min(canvas.height);
    Rect {
        x: canvas.x + (canvas.width - width) / 2,
        y: canvas.y + (canvas.height - height) / 2,
        width,
        height,
    }
}
