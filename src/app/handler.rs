use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::error;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.set_viewport(Rect::new(0, 0, width, height));
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => vec![Action::Quit],
        KeyCode::Enter | KeyCode::Char(' ') => {
            let id = state.target_id().to_string();
            click(state, &id)
        }
        KeyCode::Char('b') => {
            state.bind_target();
            vec![]
        }
        KeyCode::Char('u') => {
            state.unbind_target();
            vec![]
        }
        KeyCode::Char('d') => {
            state.detach_target();
            vec![]
        }
        KeyCode::Char('r') => {
            state.reset();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    match state.click_at(mouse.column, mouse.row) {
        Some(Err(e)) => {
            error!(column = mouse.column, row = mouse.row, "Click handler failed: {}", e);
            vec![Action::Bell]
        }
        _ => vec![],
    }
}

fn click(state: &mut AppState, id: &str) -> Vec<Action> {
    match state.click(id) {
        Some(Err(e)) => {
            error!(target_id = %id, "Click handler failed: {}", e);
            vec![Action::Bell]
        }
        _ => vec![],
    }
}
