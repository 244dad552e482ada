#![forbid(unsafe_code)]

//! Cell and row formatting.
//!
//! A [`Row`] is one logical display line: an ordered list of [`Cell`]s
//! joined by a separator. Cells render independently (prefix/suffix,
//! fixed width, justification, padding) and cache their rendered text;
//! the row layers windowed printing on top, which is how horizontal
//! scrolling and right-edge truncation happen without any cell knowing
//! about the viewport.

pub mod cell;
pub mod row;

pub use cell::{Cell, Justify};
pub use row::{PrintOptions, Row};
