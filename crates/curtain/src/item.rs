#![forbid(unsafe_code)]

//! Menu items, actions and control signals.

use std::collections::HashMap;
use std::fmt;

use curtain_core::Key;
use curtain_text::Row;

use crate::lazy::Lazy;

/// Display name given to an item's default Enter action.
pub(crate) const SELECT_ACTION_NAME: &str = "Select";

/// What an action tells the engine that invoked it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Signal {
    /// Keep the current item list and state.
    #[default]
    Continue,
    /// Discard the item list and every lazy cache, then re-run the
    /// population callback.
    Refresh,
    /// Stop this menu's loop and return to whoever opened it.
    Exit,
}

/// An item's display value: a plain string or a formatted [`Row`].
#[derive(Debug, Clone)]
pub enum Title {
    /// Plain text, rendered as a single default cell.
    Text(String),
    /// A formatted multi-cell row.
    Row(Row),
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Row> for Title {
    fn from(row: Row) -> Self {
        Self::Row(row)
    }
}

/// A shortcut-triggered action on a menu item.
pub struct Action {
    pub(crate) name: String,
    pub(crate) run: Box<dyn FnMut() -> Signal>,
}

impl Action {
    /// Create an action with the footer `name` and its callback.
    #[must_use]
    pub fn new(name: impl Into<String>, run: impl FnMut() -> Signal + 'static) -> Self {
        Self {
            name: name.into(),
            run: Box::new(run),
        }
    }

    /// Name shown in the footer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish()
    }
}

/// Shortcut key to action mapping for one item.
pub type ActionMap = HashMap<Key, Action>;

/// One selectable row of a menu.
#[derive(Debug)]
pub struct MenuItem {
    pub(crate) title: Lazy<Title>,
    pub(crate) actions: Lazy<ActionMap>,
}

impl MenuItem {
    pub(crate) fn new(title: Lazy<Title>) -> Self {
        Self {
            title,
            actions: Lazy::resolved(ActionMap::new()),
        }
    }

    /// Register the default Enter action.
    ///
    /// Merge order is deliberate: the default is seeded under
    /// [`Key::Enter`] only where no explicit action claims that key, so
    /// an explicitly declared Enter shortcut always wins over the
    /// default, regardless of declaration order.
    pub(crate) fn set_default(&mut self, action: Action) {
        self.edit_actions(|map| {
            map.entry(Key::Enter).or_insert(action);
        });
    }

    /// Register an explicit shortcut action, replacing any previous
    /// binding of the same key (the default Enter action included).
    pub(crate) fn declare(&mut self, key: Key, action: Action) {
        self.edit_actions(move |map| {
            map.insert(key, action);
        });
    }

    /// Replace the action source with a producer, evaluated on first
    /// read. Actions registered so far become the seed the producer's
    /// output is merged over.
    pub(crate) fn set_lazy_actions(
        &mut self,
        producer: impl FnOnce() -> Vec<(Key, Action)> + 'static,
    ) {
        let seed = std::mem::replace(&mut self.actions, Lazy::resolved(ActionMap::new()))
            .into_value()
            .unwrap_or_default();
        self.actions = Lazy::pending(move || {
            let mut map = seed;
            map.extend(producer());
            map
        });
    }

    fn edit_actions(&mut self, edit: impl FnOnce(&mut ActionMap) + 'static) {
        let actions = std::mem::replace(&mut self.actions, Lazy::resolved(ActionMap::new()));
        self.actions = actions.compose(move |mut map| {
            edit(&mut map);
            map
        });
    }

    /// Whether this item should be colored as actionable.
    ///
    /// Must never force a pending producer (a never-selected item's
    /// actions are never evaluated), so a pending action set counts as
    /// actionable; once resolved, emptiness decides.
    pub(crate) fn maybe_has_actions(&self) -> bool {
        match self.actions.peek() {
            Some(map) => !map.is_empty(),
            None => true,
        }
    }
}
