//! Element tree and click dispatch.
//!
//! The document owns every element; callers look elements up by id and
//! hand the reference to whatever needs it.

pub mod listeners;

use crate::toggle::{ColorTarget, TextColor};
use ratatui::layout::{Position, Rect};
use std::cell::RefCell;
use std::rc::Rc;

pub use listeners::ClickListeners;

pub type ElementRef = Rc<RefCell<Element>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: String,
    pub text: String,
    /// Unset until something assigns a color.
    pub color: Option<TextColor>,
    pub area: Rect,
}

impl Element {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            color: None,
            area: Rect::default(),
        }
    }
}

impl ColorTarget for Element {
    fn set_color(&mut self, color: TextColor) {
        self.color = Some(color);
    }
}

#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<ElementRef>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, element: Element) -> ElementRef {
        let element = Rc::new(RefCell::new(element));
        self.elements.push(element.clone());
        element
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.elements
            .iter()
            .find(|el| el.borrow().id == id)
            .cloned()
    }

    /// Detach an element. Returns it so the caller decides whether it lives on.
    pub fn remove(&mut self, id: &str) -> Option<ElementRef> {
        let idx = self.elements.iter().position(|el| el.borrow().id == id)?;
        Some(self.elements.remove(idx))
    }

    /// Topmost element whose area covers the given cell.
    pub fn element_at(&self, column: u16, row: u16) -> Option<ElementRef> {
        let pos = Position::new(column, row);
        self.elements
            .iter()
            .rev()
            .find(|el| el.borrow().area.contains(pos))
            .cloned()
    }

    pub fn elements(&self) -> impl Iterator<Item = &ElementRef> {
        self.elements.iter()
    }
}
