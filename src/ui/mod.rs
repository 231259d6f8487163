mod element;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    // Same viewport the element areas were laid out against, kept inside the frame
    let viewport = state.viewport.intersection(frame.area());
    let app_layout = layout::compute_layout(viewport, state.config.ui.show_status_bar);

    for el in state.document.elements() {
        element::render(frame, &el.borrow(), state);
    }
    if let Some(area) = app_layout.status_bar {
        status_bar::render(frame, area, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn draw_on(state: &AppState, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(state: &AppState) -> ratatui::buffer::Buffer {
        draw_on(state, state.viewport.width, state.viewport.height)
    }

    fn row_text(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn state_with(cfg: AppConfig, width: u16, height: u16) -> AppState {
        let mut state = AppState::new(cfg);
        state.set_viewport(Rect::new(0, 0, width, height));
        state
    }

    fn state() -> AppState {
        state_with(AppConfig::default(), 80, 24)
    }

    #[test]
    fn test_renders_element_text_and_color() {
        let mut state = state();
        let buffer = draw(&state);
        assert!(row_text(&buffer, 11).contains("Hello, world!"));

        state.click("hello");
        let buffer = draw(&state);
        let area = state.document.get_element_by_id("hello").unwrap().borrow().area;
        let cell = &buffer[(area.x + 2, area.y + 1)];
        assert_eq!(cell.symbol(), "H");
        assert_eq!(cell.fg, Color::Red);
    }

    #[test]
    fn test_status_bar_on_last_row() {
        let state = state();
        let buffer = draw(&state);
        let status = row_text(&buffer, 23);
        assert!(status.contains("#hello bound | color: unset | clicks: 0"));
        assert!(status.contains("q quit"));
    }

    #[test]
    fn test_detached_element_not_drawn() {
        let mut state = state();
        state.detach_target();
        let buffer = draw(&state);
        assert!(!row_text(&buffer, 11).contains("Hello"));
    }

    #[test]
    fn test_key_hints_dropped_on_narrow_terminal() {
        let state = state_with(AppConfig::default(), 60, 24);
        let status = row_text(&draw(&state), 23);
        assert!(status.contains("clicks: 0"));
        assert!(!status.contains("q quit"));
    }

    #[test]
    fn test_key_hints_measured_in_cells() {
        // seven double-width glyphs: 7 chars, 14 cells
        let mut cfg = AppConfig::default();
        cfg.target = "日日日日日日日".into();
        cfg.element.id = cfg.target.clone();
        let state = state_with(cfg, 80, 24);

        let status = row_text(&draw(&state), 23);
        assert!(status.contains("clicks: 0"));
        assert!(!status.contains("q quit"));
    }

    #[test]
    fn test_layout_follows_viewport() {
        let state = state();
        let buffer = draw_on(&state, 100, 30);
        assert!(row_text(&buffer, 23).contains("#hello bound"));
        assert!(!row_text(&buffer, 29).contains("#hello"));

        let area = state.document.get_element_by_id("hello").unwrap().borrow().area;
        assert_eq!(buffer[(area.x + 2, area.y + 1)].symbol(), "H");
    }

    #[test]
    fn test_viewport_larger_than_frame_is_clipped() {
        let state = state_with(AppConfig::default(), 120, 40);
        let buffer = draw_on(&state, 80, 24);
        assert_eq!(buffer.area, Rect::new(0, 0, 80, 24));
        assert!(row_text(&buffer, 23).contains("#hello bound"));
    }
}
