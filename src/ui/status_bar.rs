use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = " b/u bind  d detach  r reset  q quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = format!(" {} ", state.status_line());
    let style = if state.last_error.is_some() {
        Theme::status_error()
    } else {
        Theme::status_bar()
    };

    // Pad to fill remaining space, hints only if they fit
    let used = status.width() + KEY_HINTS.width();
    let mut parts = vec![Span::styled(status, style)];
    if used <= area.width as usize {
        let remaining = area.width as usize - used;
        parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
        parts.push(Span::styled(KEY_HINTS, Theme::key_hint()));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
