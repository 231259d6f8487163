use crate::app::state::AppState;
use crate::dom::Element;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, element: &Element, state: &AppState) {
    let area = element.area.intersection(frame.area());
    if area.width == 0 || area.height == 0 {
        return;
    }

    let border = if state.listeners.is_bound(&element.id) {
        Theme::border_bound()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .style(Theme::element(element.color));

    let paragraph = Paragraph::new(element.text.as_str())
        .style(Theme::element(element.color))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
