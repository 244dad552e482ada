#![forbid(unsafe_code)]

//! Deterministic test backend for curtain menus.
//!
//! [`CaptureSurface`] implements [`Surface`] over a fixed-size in-memory
//! grid of `(char, ColorTag)` cells. Tests drive a menu with a scripted
//! key queue, then assert on the captured screen:
//!
//! ```
//! use curtain_harness::CaptureSurface;
//! use curtain_core::{ColorTag, Surface};
//!
//! let mut surface = CaptureSurface::new(24, 80);
//! surface.write_styled("hello", ColorTag::Green);
//! assert_eq!(surface.line(0), "hello");
//! assert_eq!(surface.color_at(0, 0), ColorTag::Green);
//! ```
//!
//! The grid survives `release`, so assertions made after a menu run see
//! the last frame it drew. Reading a key is an error by design: scripted
//! sessions must carry their own exit key, and a script that runs dry
//! should fail the test instead of spinning forever.

use std::io;

use curtain_core::{ColorTag, Key, Surface};

/// In-memory [`Surface`] with a fixed-size styled character grid.
#[derive(Debug, Clone)]
pub struct CaptureSurface {
    rows: u16,
    cols: u16,
    cursor: (u16, u16),
    color: ColorTag,
    grid: Vec<(char, ColorTag)>,
}

impl CaptureSurface {
    /// Create a blank `rows` x `cols` surface.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cursor: (0, 0),
            color: ColorTag::Line,
            grid: vec![(' ', ColorTag::Line); rows as usize * cols as usize],
        }
    }

    /// Text of row `row`, trailing spaces trimmed.
    #[must_use]
    pub fn line(&self, row: u16) -> String {
        self.raw_line(row).trim_end().to_string()
    }

    /// Text of row `row`, full width.
    #[must_use]
    pub fn raw_line(&self, row: u16) -> String {
        self.row_cells(row).iter().map(|(c, _)| *c).collect()
    }

    /// Text of the `n`-th row counting from the bottom (0 = last row).
    #[must_use]
    pub fn line_from_bottom(&self, n: u16) -> String {
        self.line(self.rows - 1 - n)
    }

    /// Color of the cell at `(row, col)`.
    #[must_use]
    pub fn color_at(&self, row: u16, col: u16) -> ColorTag {
        self.grid[row as usize * self.cols as usize + col as usize].1
    }

    /// `(char, color)` cells of row `row`.
    #[must_use]
    pub fn row_cells(&self, row: u16) -> &[(char, ColorTag)] {
        let start = row as usize * self.cols as usize;
        &self.grid[start..start + self.cols as usize]
    }

    /// The whole screen as newline-joined raw lines.
    #[must_use]
    pub fn screen(&self) -> String {
        (0..self.rows)
            .map(|r| self.raw_line(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Surface for CaptureSurface {
    fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn set_cursor(&mut self, row: u16, col: u16) {
        self.cursor = (row, col);
    }

    fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    fn write_styled(&mut self, text: &str, color: ColorTag) {
        self.color = color;
        for ch in text.chars() {
            if ch == '\n' {
                self.cursor = (self.cursor.0.saturating_add(1), 0);
                continue;
            }
            let (row, col) = self.cursor;
            if row < self.rows && col < self.cols {
                self.grid[row as usize * self.cols as usize + col as usize] = (ch, color);
            }
            self.cursor = (row, col.saturating_add(1));
        }
    }

    fn set_color(&mut self, color: ColorTag) {
        self.color = color;
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "scripted key queue exhausted",
        ))
    }

    fn clear(&mut self) {
        self.cursor = (0, 0);
        self.grid.fill((' ', ColorTag::Line));
    }

    fn acquire(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn release(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_advance_the_cursor_and_wrap_on_newline() {
        let mut surface = CaptureSurface::new(3, 10);
        surface.write_styled("ab\ncd", ColorTag::Green);
        assert_eq!(surface.line(0), "ab");
        assert_eq!(surface.line(1), "cd");
        assert_eq!(surface.cursor(), (1, 2));
        assert_eq!(surface.color_at(1, 1), ColorTag::Green);
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut surface = CaptureSurface::new(2, 4);
        surface.set_cursor(1, 2);
        surface.write_styled("wxyz", ColorTag::Red);
        assert_eq!(surface.line(1), "  wx");
    }

    #[test]
    fn clear_resets_grid_and_cursor() {
        let mut surface = CaptureSurface::new(2, 4);
        surface.write_styled("abcd", ColorTag::Red);
        surface.clear();
        assert_eq!(surface.cursor(), (0, 0));
        assert_eq!(surface.raw_line(0), "    ");
    }

    #[test]
    fn reading_a_key_is_an_error() {
        let mut surface = CaptureSurface::new(2, 4);
        assert!(surface.read_key().is_err());
    }
}
