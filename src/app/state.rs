use crate::config::AppConfig;
use crate::dom::{ClickListeners, Document, Element};
use crate::toggle::{self, TextColor, ToggleError};
use crate::ui::layout;
use ratatui::layout::Rect;
use tracing::{debug, info, trace, warn};

#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub document: Document,
    pub listeners: ClickListeners,
    pub viewport: Rect,
    /// Clicks that reached a handler and succeeded.
    pub clicks: u64,
    pub last_error: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut state = Self {
            config,
            document: Document::new(),
            listeners: ClickListeners::new(),
            viewport: Rect::default(),
            clicks: 0,
            last_error: None,
            should_quit: false,
            dirty: true,
        };
        state.reset();
        state
    }

    pub fn target_id(&self) -> &str {
        &self.config.target
    }

    /// Rebuild the document from config and bind the target again.
    pub fn reset(&mut self) {
        self.document = Document::new();
        self.document.append(Element::new(
            self.config.element.id.clone(),
            self.config.element.text.clone(),
        ));
        self.listeners.remove(&self.config.target);
        self.clicks = 0;
        self.last_error = None;
        self.bind_target();
        self.relayout();
    }

    /// Look the target up by id and register a fresh toggle as its click
    /// handler. Returns `false` when no such element exists.
    pub fn bind_target(&mut self) -> bool {
        let id = self.config.target.clone();
        let Some(element) = self.document.get_element_by_id(&id) else {
            warn!(target_id = %id, "No element with this id, click binding skipped");
            return false;
        };
        let mut handler = toggle::bind(&element);
        self.listeners.set_onclick(
            &id,
            Box::new(move || -> Result<(), ToggleError> {
                handler.click()?;
                trace!(state = ?handler.state(), "Toggled");
                Ok(())
            }),
        );
        info!(target_id = %id, "Toggle bound");
        true
    }

    pub fn unbind_target(&mut self) -> bool {
        let removed = self.listeners.remove(&self.config.target);
        if removed {
            info!(target_id = %self.config.target, "Toggle unbound");
        }
        removed
    }

    /// Drop the target from the document. Its handler, if any, stays registered.
    pub fn detach_target(&mut self) -> bool {
        let detached = self.document.remove(&self.config.target).is_some();
        if detached {
            info!(target_id = %self.config.target, "Element detached");
        }
        detached
    }

    /// Dispatch a click to `id`. `None` if no handler is bound there.
    pub fn click(&mut self, id: &str) -> Option<Result<(), ToggleError>> {
        let result = self.listeners.dispatch(id)?;
        match &result {
            Ok(()) => {
                self.clicks += 1;
                self.last_error = None;
                debug!(element_id = %id, color = ?self.color_of(id), "Click handled");
            }
            Err(e) => self.last_error = Some(format!("{}: {}", id, e)),
        }
        Some(result)
    }

    /// Dispatch a click to whatever element covers the given cell.
    pub fn click_at(&mut self, column: u16, row: u16) -> Option<Result<(), ToggleError>> {
        let id = self.document.element_at(column, row)?.borrow().id.clone();
        self.click(&id)
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.relayout();
    }

    fn relayout(&mut self) {
        let canvas = layout::compute_layout(self.viewport, self.config.ui.show_status_bar).canvas;
        for element in self.document.elements() {
            let mut element = element.borrow_mut();
            let area = layout::element_rect(canvas, &element.text);
            element.area = area;
        }
    }

    pub fn is_bound(&self) -> bool {
        self.listeners.is_bound(&self.config.target)
    }

    pub fn is_attached(&self) -> bool {
        self.document.get_element_by_id(&self.config.target).is_some()
    }

    pub fn target_color(&self) -> Option<TextColor> {
        self.color_of(&self.config.target)
    }

    /// Color attribute of the element with this id, if attached and set.
    pub fn color_of(&self, id: &str) -> Option<TextColor> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.borrow().color)
    }

    pub fn status_line(&self) -> String {
        let binding = if self.is_bound() { "bound" } else { "unbound" };
        let color = match (self.is_attached(), self.target_color()) {
            (false, _) => "detached".to_string(),
            (true, Some(color)) => color.to_string(),
            (true, None) => "unset".to_string(),
        };
        let mut line = format!(
            "#{} {} | color: {} | clicks: {}",
            self.config.target, binding, color, self.clicks
        );
        if let Some(err) = &self.last_error {
            line.push_str(&format!(" | error: {}", err));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport(Rect::new(0, 0, 80, 24));
        state
    }

    #[test]
    fn test_new_binds_configured_target() {
        let state = state();
        assert!(state.is_bound());
        assert!(state.is_attached());
        assert_eq!(state.target_color(), None);
        assert_eq!(state.clicks, 0);
    }

    #[test]
    fn test_missing_target_binds_nothing() {
        let mut cfg = AppConfig::default();
        cfg.target = "nowhere".into();
        let mut state = AppState::new(cfg);
        assert!(!state.is_bound());
        assert!(state.click("nowhere").is_none());
        assert!(state.click("hello").is_none());
        let el = state.document.get_element_by_id("hello").unwrap();
        assert_eq!(el.borrow().color, None);
    }

    #[test]
    fn test_clicks_toggle_target() {
        let mut state = state();
        assert_eq!(state.click("hello"), Some(Ok(())));
        assert_eq!(state.target_color(), Some(TextColor::Red));
        assert_eq!(state.click("hello"), Some(Ok(())));
        assert_eq!(state.target_color(), Some(TextColor::Black));
        assert_eq!(state.clicks, 2);
    }

    #[test]
    fn test_click_at_uses_element_area() {
        let mut state = state();
        let area = state.document.get_element_by_id("hello").unwrap().borrow().area;
        assert!(area.width > 0 && area.height > 0);

        assert!(state.click_at(0, 0).is_none());
        assert_eq!(state.target_color(), None);
        assert_eq!(state.click_at(area.x, area.y), Some(Ok(())));
        assert_eq!(state.target_color(), Some(TextColor::Red));
    }

    #[test]
    fn test_unbind_then_rebind_starts_over() {
        let mut state = state();
        state.click("hello");
        assert!(state.unbind_target());
        assert!(state.click("hello").is_none());
        assert_eq!(state.target_color(), Some(TextColor::Red));

        assert!(state.bind_target());
        // fresh toggle: first click goes to red again
        state.click("hello");
        assert_eq!(state.target_color(), Some(TextColor::Red));
    }

    #[test]
    fn test_detached_click_reports_error() {
        let mut state = state();
        assert!(state.detach_target());
        assert_eq!(state.click("hello"), Some(Err(ToggleError::Detached)));
        assert_eq!(state.clicks, 0);
        assert!(state.last_error.as_deref().unwrap().contains("no longer attached"));
        assert!(state.status_line().contains("detached"));
    }

    #[test]
    fn test_reset_restores_document() {
        let mut state = state();
        state.click("hello");
        state.detach_target();
        state.reset();
        assert!(state.is_attached());
        assert!(state.is_bound());
        assert_eq!(state.target_color(), None);
        assert_eq!(state.clicks, 0);
        assert!(state.last_error.is_none());
        let area = state.document.get_element_by_id("hello").unwrap().borrow().area;
        assert!(area.width > 0);
    }

    #[test]
    fn test_status_line() {
        let mut state = state();
        assert_eq!(state.status_line(), "#hello bound | color: unset | clicks: 0");
        state.click("hello");
        assert_eq!(state.status_line(), "#hello bound | color: red | clicks: 1");
        state.unbind_target();
        assert_eq!(state.status_line(), "#hello unbound | color: red | clicks: 1");
    }

    #[test]
    fn test_click_at_reaches_non_target_element() {
        let mut state = state();
        let other = state.document.append(Element::new("other", "Other"));
        other.borrow_mut().area = Rect::new(0, 0, 5, 1);
        let mut handler = toggle::bind(&other);
        state.listeners.set_onclick(
            "other",
            Box::new(move || -> Result<(), ToggleError> { handler.click() }),
        );

        assert_eq!(state.click_at(1, 0), Some(Ok(())));
        assert_eq!(state.color_of("other"), Some(TextColor::Red));
        assert_eq!(state.target_color(), None);
        assert_eq!(state.color_of("missing"), None);
    }
}
