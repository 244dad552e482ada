#![forbid(unsafe_code)]

//! The navigation engine.
//!
//! One [`Menu`] instance owns one cooperative input/draw loop over one
//! [`Surface`]. Sub-menus are not a stack: an action callback simply
//! constructs and runs another `Menu`, which owns its own viewport and
//! catalog and returns control when it exits. Handing the nested menu a
//! clone of the parent's [`ReplayKeys`] lets one recorded script drive
//! an arbitrarily deep menu tree.
//!
//! # Frame layout
//!
//! ```text
//! ===============================    row 0
//! = Title                            row 1
//! -------------------------------    row 2
//! item                               rows 3 .. rows-3 (the page)
//! item (selected, highlighted)
//! ===============================    row rows-2
//! = Arrows/Home/End: Navigate | …    row rows-1 (footer)
//! ```
//!
//! Item rows and the footer scroll horizontally with the viewport; the
//! title chrome does not.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use curtain_core::{ColorTag, Key, Result, Surface, TermSurface};
use curtain_text::{PrintOptions, Row};

use crate::catalog::{Catalog, MenuBuilder};
use crate::item::{Signal, Title};

/// Fixed chrome: three header rows plus two footer rows.
const CHROME_ROWS: usize = 5;

/// How long to sleep between input polls when no key is pending.
const POLL_SLEEP: Duration = Duration::from_millis(10);

/// A shared FIFO of pre-recorded keys consumed in place of live input.
///
/// Cloning yields another handle to the same queue; a nested menu given
/// a clone drains the very same script as its parent, which is what
/// makes replayed sessions deterministic across sub-menus.
#[derive(Debug, Clone, Default)]
pub struct ReplayKeys {
    queue: Rc<RefCell<VecDeque<Key>>>,
}

impl ReplayKeys {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key to the script.
    pub fn push(&self, key: impl Into<Key>) {
        self.queue.borrow_mut().push_back(key.into());
    }

    /// Consume the next scripted key, if any.
    pub fn pop(&self) -> Option<Key> {
        self.queue.borrow_mut().pop_front()
    }

    /// Number of keys left in the script.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Whether the script has run dry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl<K: Into<Key>> FromIterator<K> for ReplayKeys {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let keys = Self::new();
        for key in iter {
            keys.push(key);
        }
        keys
    }
}

/// Vertical and horizontal view state over the item list.
#[derive(Debug, Clone, Copy, Default)]
struct Viewport {
    selected: usize,
    first_row: usize,
    first_col: usize,
}

impl Viewport {
    /// Silently repair the state after a move or a catalog rebuild:
    /// clamp the selection into bounds, then shift the window minimally
    /// so the selection stays visible.
    fn clamp(&mut self, item_count: usize, page: usize) {
        if self.selected >= item_count {
            self.selected = item_count.saturating_sub(1);
        }
        if self.selected < self.first_row {
            self.first_row = self.selected;
        } else if self.selected >= self.first_row + page {
            self.first_row = self.selected + 1 - page;
        }
    }
}

/// An interactive, keyboard-driven selection menu.
///
/// Runs synchronously until the user presses Escape or an action returns
/// [`Signal::Exit`]:
///
/// ```no_run
/// use curtain::{Menu, Signal};
///
/// Menu::new("Main menu").run(|menu| {
///     menu.item("Say hello").on_select(|| {
///         println!("hello");
///         Signal::Continue
///     });
///     menu.item("Quit").on_select(|| Signal::Exit);
/// })?;
/// # Ok::<(), curtain::Error>(())
/// ```
#[derive(Debug)]
pub struct Menu {
    title: String,
    keys: ReplayKeys,
}

impl Menu {
    /// Create a menu with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            keys: ReplayKeys::new(),
        }
    }

    /// Use a pre-recorded key script instead of live input while it
    /// lasts. The queue is shared: hand clones of the same handle to
    /// nested menus.
    #[must_use]
    pub fn keys(mut self, keys: ReplayKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Run on the process's terminal until exited.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyMenu`](curtain_core::Error::EmptyMenu) if `populate`
    /// registers no items (initially or on a refresh), or an I/O error
    /// from the terminal.
    pub fn run(self, populate: impl FnMut(&mut MenuBuilder)) -> Result<()> {
        let mut surface = TermSurface::new();
        self.run_on(&mut surface, populate)
    }

    /// Run on an arbitrary surface until exited.
    ///
    /// This is the entry point for harness-driven tests and for nested
    /// menus that share a scripted surface.
    ///
    /// # Errors
    ///
    /// As [`run`](Self::run).
    pub fn run_on<S: Surface>(
        self,
        surface: &mut S,
        mut populate: impl FnMut(&mut MenuBuilder),
    ) -> Result<()> {
        let mut catalog = Catalog::build(&self.title, &mut populate)?;
        surface.acquire()?;
        info!(title = %self.title, items = catalog.len(), "menu opened");
        let result = self.drive(surface, &mut catalog, &mut populate);
        surface.release();
        info!(title = %self.title, "menu closed");
        result
    }

    /// The per-frame cycle: draw, read one key, dispatch, repair state.
    fn drive<S: Surface>(
        &self,
        surface: &mut S,
        catalog: &mut Catalog,
        populate: &mut dyn FnMut(&mut MenuBuilder),
    ) -> Result<()> {
        let mut view = Viewport::default();
        loop {
            let (rows, _) = surface.dimensions();
            let page = (rows as usize).saturating_sub(CHROME_ROWS).max(1);
            self.draw(surface, catalog, &view, page);

            let key = self.next_key(surface)?;
            debug!(?key, selected = view.selected, "key");
            match key {
                Key::Right => view.first_col += 1,
                Key::Left => view.first_col = view.first_col.saturating_sub(1),
                Key::Up => view.selected = view.selected.saturating_sub(1),
                Key::PageUp => view.selected = view.selected.saturating_sub(page - 1),
                Key::Down => view.selected += 1,
                Key::PageDown => view.selected += page - 1,
                Key::Home => view.selected = 0,
                Key::End => view.selected = catalog.len().saturating_sub(1),
                Key::Escape => return Ok(()),
                shortcut => {
                    let actions = catalog.items[view.selected].actions.force();
                    if let Some(action) = actions.get_mut(&shortcut) {
                        debug!(key = %shortcut, action = %action.name(), "action dispatched");
                        // The callback may drive its own terminal UI, a
                        // nested menu included; it gets a clean surface.
                        surface.release();
                        let signal = (action.run)();
                        match signal {
                            Signal::Exit => return Ok(()),
                            Signal::Refresh => {
                                *catalog = Catalog::build(&self.title, populate)?;
                                info!(items = catalog.len(), "menu refreshed");
                            }
                            Signal::Continue => {}
                        }
                        surface.acquire()?;
                        surface.clear();
                    }
                }
            }
            view.clamp(catalog.len(), page);
        }
    }

    /// Draw one frame. Titles of visible items resolve first, in
    /// ascending index order; the footer then resolves the selected
    /// item's actions — the ordering the lazy cache guarantees.
    fn draw<S: Surface>(&self, surface: &mut S, catalog: &mut Catalog, view: &Viewport, page: usize) {
        let chrome = PrintOptions {
            default_color: ColorTag::Title,
            single_line: true,
            ..PrintOptions::default()
        };

        surface.set_cursor(0, 0);
        print_line(surface, "", &PrintOptions { pad: Some('='), ..chrome.clone() });
        print_line(
            surface,
            &format!("= {}", self.title),
            &PrintOptions { pad: Some(' '), ..chrome.clone() },
        );
        print_line(surface, "", &PrintOptions { pad: Some('-'), ..chrome.clone() });

        let end = (view.first_row + page).min(catalog.len());
        for idx in view.first_row..end {
            let selected = idx == view.selected;
            let item = &mut catalog.items[idx];
            let opts = PrintOptions {
                from: view.first_col,
                default_color: if item.maybe_has_actions() {
                    ColorTag::MenuItem
                } else {
                    ColorTag::Line
                },
                force_color: selected.then_some(ColorTag::MenuItemSelected),
                pad: selected.then_some(' '),
                single_line: true,
                ..PrintOptions::default()
            };
            match item.title.force() {
                Title::Text(text) => Row::from(text.as_str()).print_on(surface, &opts),
                Title::Row(row) => row.print_on(surface, &opts),
            }
        }

        let (rows, _) = surface.dimensions();
        surface.set_cursor(rows.saturating_sub(2), 0);
        print_line(surface, "", &PrintOptions { pad: Some('='), ..chrome.clone() });
        let footer = self.footer_text(catalog, view);
        print_line(
            surface,
            &footer,
            &PrintOptions {
                from: view.first_col,
                pad: Some(' '),
                add_newline: false,
                ..chrome
            },
        );
    }

    /// Compose the footer: fixed navigation hints plus the selected
    /// item's actions (forcing exactly that item's lazy action set),
    /// `label: name` pairs sorted by label.
    fn footer_text(&self, catalog: &mut Catalog, view: &Viewport) -> String {
        let mut entries = BTreeMap::new();
        entries.insert("Arrows/Home/End".to_string(), "Navigate".to_string());
        entries.insert("Esc".to_string(), "Exit".to_string());
        for (key, action) in catalog.items[view.selected].actions.force().iter() {
            entries.insert(key.to_string(), action.name().to_string());
        }
        let joined = entries
            .iter()
            .map(|(label, name)| format!("{label}: {name}"))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("= {joined}")
    }

    /// Next key: the replay script while it lasts, else a non-blocking
    /// poll of the surface, sleeping briefly between empty polls.
    fn next_key<S: Surface>(&self, surface: &mut S) -> Result<Key> {
        loop {
            if let Some(key) = self.keys.pop() {
                return Ok(key);
            }
            if let Some(key) = surface.read_key()? {
                return Ok(key);
            }
            thread::sleep(POLL_SLEEP);
        }
    }
}

fn print_line<S: Surface>(surface: &mut S, text: &str, opts: &PrintOptions) {
    Row::from(text).print_on(surface, opts);
}
