#![forbid(unsafe_code)]

//! The display surface abstraction.
//!
//! A [`Surface`] is everything the menu engine needs from a terminal: a
//! character grid with a cursor, styled writes, a non-blocking key source,
//! and scoped acquisition of the underlying device. The engine holds
//! exclusive ownership of its surface while running, releases it around
//! action callbacks (so a callback may drive its own terminal UI, nested
//! menus included), and releases it for good when it exits.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crate::color::ColorTag;
use crate::key::Key;

/// A terminal-like character grid the menu engine draws on.
///
/// # Contract
///
/// - `write_styled` starts at the current cursor and advances it; a `'\n'`
///   in the text moves the cursor to column 0 of the next row.
/// - `read_key` never blocks: it reports a key if one is pending and
///   `None` otherwise. Pacing is the caller's job.
/// - `acquire`/`release` bracket ownership of the physical device.
///   `release` must be safe to call when not acquired.
pub trait Surface {
    /// Grid size as `(rows, cols)`.
    fn dimensions(&self) -> (u16, u16);

    /// Move the cursor to `(row, col)`.
    fn set_cursor(&mut self, row: u16, col: u16);

    /// Current cursor position as `(row, col)`.
    fn cursor(&self) -> (u16, u16);

    /// Write `text` at the cursor in the color named by `color`.
    fn write_styled(&mut self, text: &str, color: ColorTag);

    /// Set the color used for subsequent writes.
    fn set_color(&mut self, color: ColorTag);

    /// Poll for a pending key without blocking.
    fn read_key(&mut self) -> io::Result<Option<Key>>;

    /// Clear the grid and home the cursor.
    fn clear(&mut self);

    /// Take ownership of the underlying device.
    fn acquire(&mut self) -> io::Result<()>;

    /// Give the underlying device back.
    fn release(&mut self);
}

/// Shared handle to a surface.
///
/// Lets an action callback and the engine that invoked it address the same
/// surface, which is how nested scripted menus are driven in tests. The
/// engine releases the surface before running a callback and re-acquires
/// it after, so the borrows never overlap in time.
impl<S: Surface> Surface for Rc<RefCell<S>> {
    fn dimensions(&self) -> (u16, u16) {
        self.borrow().dimensions()
    }

    fn set_cursor(&mut self, row: u16, col: u16) {
        self.borrow_mut().set_cursor(row, col);
    }

    fn cursor(&self) -> (u16, u16) {
        self.borrow().cursor()
    }

    fn write_styled(&mut self, text: &str, color: ColorTag) {
        self.borrow_mut().write_styled(text, color);
    }

    fn set_color(&mut self, color: ColorTag) {
        self.borrow_mut().set_color(color);
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        self.borrow_mut().read_key()
    }

    fn clear(&mut self) {
        self.borrow_mut().clear();
    }

    fn acquire(&mut self) -> io::Result<()> {
        self.borrow_mut().acquire()
    }

    fn release(&mut self) {
        self.borrow_mut().release();
    }
}
