#![forbid(unsafe_code)]

//! Keyboard-driven list-selection menus for text terminals.
//!
//! A menu is a scrollable, paginated list of items. Arrows, Home/End and
//! Page Up/Down navigate; each item can carry shortcut actions shown in
//! the footer; Escape (or an action returning [`Signal::Exit`]) leaves
//! the menu. Opening a sub-menu is nothing special: an action callback
//! constructs and runs another [`Menu`].
//!
//! ```no_run
//! use curtain::{Menu, Signal};
//!
//! Menu::new("Top menu").run(|menu| {
//!     menu.item("Enter sub-menu").on_select(|| {
//!         Menu::new("Sub-menu!")
//!             .run(|sub| {
//!                 sub.item("We are in a sub-menu");
//!                 sub.item("Back").on_select(|| Signal::Exit);
//!             })
//!             .ok();
//!         Signal::Continue
//!     });
//!     menu.item("Quit").on_select(|| Signal::Exit);
//! })?;
//! # Ok::<(), curtain::Error>(())
//! ```
//!
//! Item titles are either plain strings or formatted [`Row`]s, and both
//! titles and action sets may be deferred to producers evaluated on
//! first display ([`MenuBuilder::lazy_item`],
//! [`ItemHandle::lazy_actions`]); results are cached until an action
//! returns [`Signal::Refresh`], which rebuilds the whole item list.

pub mod catalog;
pub mod item;
pub mod lazy;
pub mod menu;

// --- Core re-exports -------------------------------------------------------

pub use curtain_core::{ColorTag, Error, Key, Result, Surface, TermSurface};

// --- Formatting re-exports -------------------------------------------------

pub use curtain_text::{Cell, Justify, PrintOptions, Row};

// --- Menu API --------------------------------------------------------------

pub use catalog::{ItemHandle, MenuBuilder};
pub use item::{Action, ActionMap, Signal, Title};
pub use lazy::Lazy;
pub use menu::{Menu, ReplayKeys};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    //! Everyday imports for building menus.
    pub use crate::{
        Action, Cell, ColorTag, Error, Justify, Key, Menu, MenuBuilder, ReplayKeys, Result, Row,
        Signal,
    };
}
