//! Shared helpers for scripted menu sessions.
//!
//! A session runs a menu over an in-memory [`CaptureSurface`] with a
//! pre-recorded key script; assertions then read lines and colors off
//! the captured final frame. An Escape is appended to every script by
//! default so sessions terminate on their own.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use curtain::{Key, Menu, MenuBuilder, ReplayKeys};
use curtain_harness::CaptureSurface;

pub const ROWS: u16 = 24;
pub const COLS: u16 = 80;
/// Item rows on the test surface (five rows of fixed chrome).
pub const PAGE: usize = ROWS as usize - 5;

pub type SharedSurface = Rc<RefCell<CaptureSurface>>;

/// A replay script (with Escape appended) and a fresh shared surface.
pub fn scripted(keys: impl IntoIterator<Item = Key>) -> (ReplayKeys, SharedSurface) {
    let (replay, surface) = scripted_no_exit(keys);
    replay.push(Key::Escape);
    (replay, surface)
}

/// Like [`scripted`], without the trailing Escape — for sessions that
/// exit through an action signal.
pub fn scripted_no_exit(keys: impl IntoIterator<Item = Key>) -> (ReplayKeys, SharedSurface) {
    let replay: ReplayKeys = keys.into_iter().collect();
    let surface = Rc::new(RefCell::new(CaptureSurface::new(ROWS, COLS)));
    (replay, surface)
}

/// Run a menu over the shared surface with the given script.
pub fn run(
    title: &str,
    replay: &ReplayKeys,
    surface: &SharedSurface,
    populate: impl FnMut(&mut MenuBuilder),
) {
    let mut handle = surface.clone();
    Menu::new(title)
        .keys(replay.clone())
        .run_on(&mut handle, populate)
        .expect("menu run failed");
}

/// One-call session: script (plus Escape), default title, captured screen.
pub fn run_menu(
    keys: impl IntoIterator<Item = Key>,
    populate: impl FnMut(&mut MenuBuilder),
) -> SharedSurface {
    let (replay, surface) = scripted(keys);
    run("Menu title", &replay, &surface, populate);
    surface
}

/// Text of a screen row, trailing spaces trimmed.
pub fn line(surface: &SharedSurface, row: u16) -> String {
    surface.borrow().line(row)
}

/// Text of the `n`-th row from the bottom (0 = footer).
pub fn line_from_bottom(surface: &SharedSurface, n: u16) -> String {
    surface.borrow().line_from_bottom(n)
}
