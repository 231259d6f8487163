//! Click-driven two-state color toggle.
//!
//! [`bind`] attaches a private [`ToggleState`] to an element and returns a
//! [`ToggleHandler`]. Every [`ToggleHandler::click`] flips the state and
//! writes the matching [`TextColor`] onto the element. Registering the
//! handler as the element's click callback is up to the caller.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use thiserror::Error;

/// Text color an element can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Black,
    Red,
}

impl TextColor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::Red => "red",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Primary,
    Alternate,
}

impl ToggleState {
    pub fn flipped(self) -> Self {
        match self {
            ToggleState::Primary => ToggleState::Alternate,
            ToggleState::Alternate => ToggleState::Primary,
        }
    }

    pub fn color(self) -> TextColor {
        match self {
            ToggleState::Primary => TextColor::Black,
            ToggleState::Alternate => TextColor::Red,
        }
    }
}

/// Anything with a settable text color.
pub trait ColorTarget {
    fn set_color(&mut self, color: TextColor);
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToggleError {
    #[error("element is no longer attached to the document")]
    Detached,
    #[error("element is already borrowed")]
    Busy,
}

/// Toggle bound to one element. The element stays owned by its document;
/// the handler only holds a weak reference to it.
pub struct ToggleHandler<E> {
    target: Weak<RefCell<E>>,
    state: ToggleState,
}

/// Bind a fresh toggle to `element`. Nothing is written to the element
/// until the first click.
pub fn bind<E: ColorTarget>(element: &Rc<RefCell<E>>) -> ToggleHandler<E> {
    ToggleHandler {
        target: Rc::downgrade(element),
        state: ToggleState::default(),
    }
}

impl<E: ColorTarget> ToggleHandler<E> {
    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Flip the state and apply its color. On error the state is untouched.
    pub fn click(&mut self) -> Result<(), ToggleError> {
        let target = self.target.upgrade().ok_or(ToggleError::Detached)?;
        let mut element = target.try_borrow_mut().map_err(|_| ToggleError::Busy)?;
        self.state = self.state.flipped();
        element.set_color(self.state.color());
        Ok(())
    }
}

impl<E> fmt::Debug for ToggleHandler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleHandler")
            .field("state", &self.state)
            .field("attached", &(self.target.strong_count() > 0))
            .finish()
    }
}
