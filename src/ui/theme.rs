use crate::toggle::TextColor;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_bound() -> Style {
        Style::default().fg(Color::Cyan)
    }

    /// Element text. `None` is the inherited default, which renders black.
    pub fn element(color: Option<TextColor>) -> Style {
        let fg = match color {
            Some(TextColor::Black) | None => Color::Black,
            Some(TextColor::Red) => Color::Red,
        };
        Style::default()
            .fg(fg)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Red).bg(Color::DarkGray)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
