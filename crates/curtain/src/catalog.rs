#![forbid(unsafe_code)]

//! The ordered list of menu items and its population builder.

use curtain_core::{Error, Result};

use crate::item::{Action, MenuItem, SELECT_ACTION_NAME, Signal, Title};
use crate::lazy::Lazy;

/// The items of one menu generation.
///
/// Built by running the population callback; rebuilt from scratch (new
/// lazy cells included) every time an action asks for a refresh.
#[derive(Debug)]
pub(crate) struct Catalog {
    pub(crate) items: Vec<MenuItem>,
}

impl Catalog {
    /// Run `populate` against a fresh builder and collect the items.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyMenu`] if the callback registered nothing.
    pub(crate) fn build(
        title: &str,
        populate: &mut dyn FnMut(&mut MenuBuilder),
    ) -> Result<Self> {
        let mut builder = MenuBuilder { items: Vec::new() };
        populate(&mut builder);
        if builder.items.is_empty() {
            return Err(Error::EmptyMenu(title.to_string()));
        }
        Ok(Self {
            items: builder.items,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

/// Registration interface handed to the population callback.
///
/// Each [`item`](MenuBuilder::item)/[`lazy_item`](MenuBuilder::lazy_item)
/// call appends one row, in call order, and returns a handle for
/// attaching actions:
///
/// ```
/// # use curtain::{MenuBuilder, Signal};
/// # fn populate(menu: &mut MenuBuilder) {
/// menu.item("Quit").on_select(|| Signal::Exit);
/// menu.item("Counter")
///     .action('d', "Increase", || Signal::Refresh)
///     .action('a', "Decrease", || Signal::Refresh);
/// # }
/// ```
#[derive(Debug)]
pub struct MenuBuilder {
    items: Vec<MenuItem>,
}

impl MenuBuilder {
    /// Append an item with a literal title.
    pub fn item(&mut self, title: impl Into<Title>) -> ItemHandle<'_> {
        self.push(Lazy::resolved(title.into()))
    }

    /// Append an item whose title is produced on first display.
    pub fn lazy_item<T: Into<Title>>(
        &mut self,
        producer: impl FnOnce() -> T + 'static,
    ) -> ItemHandle<'_> {
        self.push(Lazy::pending(move || producer().into()))
    }

    fn push(&mut self, title: Lazy<Title>) -> ItemHandle<'_> {
        let idx = self.items.len();
        self.items.push(MenuItem::new(title));
        ItemHandle {
            item: &mut self.items[idx],
        }
    }
}

/// Configuration handle for the item just appended.
#[derive(Debug)]
pub struct ItemHandle<'a> {
    item: &'a mut MenuItem,
}

impl ItemHandle<'_> {
    /// Attach the default action, triggered by Enter and listed in the
    /// footer as `Select`.
    ///
    /// An explicit [`action`](Self::action) bound to Enter takes
    /// precedence over the default, whichever is declared first.
    pub fn on_select(self, run: impl FnMut() -> Signal + 'static) -> Self {
        self.item
            .set_default(Action::new(SELECT_ACTION_NAME, run));
        self
    }

    /// Attach an action under a shortcut key.
    pub fn action(
        self,
        key: impl Into<curtain_core::Key>,
        name: impl Into<String>,
        run: impl FnMut() -> Signal + 'static,
    ) -> Self {
        self.item.declare(key.into(), Action::new(name, run));
        self
    }

    /// Defer the whole action set to a producer, evaluated the first
    /// time this item is selected.
    pub fn lazy_actions(
        self,
        producer: impl FnOnce() -> Vec<(curtain_core::Key, Action)> + 'static,
    ) -> Self {
        self.item.set_lazy_actions(producer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_appear_in_call_order() {
        let catalog = Catalog::build("test", &mut |menu: &mut MenuBuilder| {
            menu.item("first");
            menu.item("second");
            menu.item("first");
        })
        .unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn empty_population_is_an_error() {
        let err = Catalog::build("Empty menu", &mut |_menu: &mut MenuBuilder| {}).unwrap_err();
        assert!(matches!(err, Error::EmptyMenu(title) if title == "Empty menu"));
    }
}
