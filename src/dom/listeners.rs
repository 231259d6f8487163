use crate::toggle::ToggleError;
use std::collections::HashMap;

pub type ClickCallback = Box<dyn FnMut() -> Result<(), ToggleError>>;

/// One click callback per element id.
#[derive(Default)]
pub struct ClickListeners {
    handlers: HashMap<String, ClickCallback>,
}

impl ClickListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for `id`, replacing whatever was there.
    pub fn set_onclick(&mut self, id: &str, callback: ClickCallback) {
        self.handlers.insert(id.to_string(), callback);
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.handlers.remove(id).is_some()
    }

    pub fn is_bound(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    /// Run the callback bound to `id`. `None` if nothing is bound.
    pub fn dispatch(&mut self, id: &str) -> Option<Result<(), ToggleError>> {
        self.handlers.get_mut(id).map(|callback| callback())
    }
}

impl std::fmt::Debug for ClickListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}
