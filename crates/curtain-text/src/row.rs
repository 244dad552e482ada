#![forbid(unsafe_code)]

//! One logical display line composed of ordered cells.

use curtain_core::{ColorTag, Error, Result, Surface};

use crate::cell::Cell;

/// Options for printing a row window onto a surface.
///
/// `from`/`to` are absolute character offsets into the row's full
/// concatenation (rendered cells joined by the separator, no trailing
/// separator); they realize horizontal scrolling without any per-cell
/// viewport awareness.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// First visible character offset.
    pub from: usize,
    /// Last visible character offset (inclusive); `None` means the end
    /// of the row.
    pub to: Option<usize>,
    /// Color for cells without one of their own.
    pub default_color: ColorTag,
    /// Color override for every cell (selection highlight).
    pub force_color: Option<ColorTag>,
    /// Fill the rest of the line with this character after the text.
    pub pad: Option<char>,
    /// Finish with a newline.
    pub add_newline: bool,
    /// Never write past the end of the current line.
    pub single_line: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            from: 0,
            to: None,
            default_color: ColorTag::Line,
            force_color: None,
            pad: None,
            add_newline: true,
            single_line: false,
        }
    }
}

/// An ordered sequence of id'd cells joined by a separator.
///
/// Rows are built once and may be mutated in place between frames;
/// mutating a cell invalidates only that cell's rendered-text cache.
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<(String, Cell)>,
    separator: String,
}

impl Row {
    /// Create an empty row with the default single-space separator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            separator: " ".to_string(),
        }
    }

    /// Create an empty row with the given cell separator.
    #[must_use]
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            cells: Vec::new(),
            separator: separator.into(),
        }
    }

    /// Append a cell under `id`.
    #[must_use]
    pub fn cell(mut self, id: impl Into<String>, cell: Cell) -> Self {
        self.push(id, cell);
        self
    }

    /// Append a cell under `id`.
    pub fn push(&mut self, id: impl Into<String>, cell: Cell) {
        self.cells.push((id.into(), cell));
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reorder (and filter) the cells.
    ///
    /// Cells are kept in the order their ids appear in `ids`; ids not
    /// present in the row are skipped, unless `fill` provides a template
    /// cell to materialize them from. Cells whose id is not listed are
    /// dropped.
    pub fn reorder(&mut self, ids: &[&str], fill: Option<&Cell>) {
        let mut reordered = Vec::with_capacity(ids.len());
        for &id in ids {
            if let Some(pos) = self.cells.iter().position(|(cid, _)| cid == id) {
                reordered.push(self.cells[pos].clone());
            } else if let Some(template) = fill {
                reordered.push((id.to_string(), template.clone()));
            }
        }
        self.cells = reordered;
    }

    /// Apply a property patch to the cell under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCell`] if no cell has that id.
    pub fn update_cell(&mut self, id: &str, patch: impl FnOnce(&mut Cell)) -> Result<()> {
        match self.cells.iter_mut().find(|(cid, _)| cid == id) {
            Some((_, cell)) => {
                patch(cell);
                Ok(())
            }
            None => Err(Error::UnknownCell(id.to_string())),
        }
    }

    /// Total width in characters of the full concatenation.
    #[must_use]
    pub fn total_width(&self) -> usize {
        if self.cells.is_empty() {
            return 0;
        }
        let sep = self.separator.chars().count() * (self.cells.len() - 1);
        sep + self.cells.iter().map(|(_, c)| c.width()).sum::<usize>()
    }

    /// Print the window `[from, to]` of this row at the surface cursor.
    ///
    /// Walks the cells in order, emitting the part of each rendered cell
    /// (plus its trailing separator, except after the last cell) that
    /// intersects the window. Color per cell: `force_color` wins, then
    /// the cell's own color, then `default_color`. With `single_line`
    /// the window is clamped so the write never reaches the last column
    /// of the current line; with `pad` the rest of the line (again short
    /// of the last column) is filled after the text.
    pub fn print_on<S: Surface + ?Sized>(&self, surface: &mut S, opts: &PrintOptions) {
        let total = self.total_width();
        let from = opts.from.min(total);
        let mut to = opts.to.unwrap_or_else(|| total.saturating_sub(1));
        let (_, cols) = surface.dimensions();
        if opts.single_line {
            let (_, cur) = surface.cursor();
            let limit = (cols as usize + from).saturating_sub(cur as usize + 2);
            to = to.min(limit);
        }

        let sep_len = self.separator.chars().count();
        let last = self.cells.len().saturating_sub(1);
        let mut offset = 0usize;
        for (idx, (_, cell)) in self.cells.iter().enumerate() {
            let text = cell.render();
            let span = text.chars().count() + sep_len;
            if from < offset + span {
                let color = opts
                    .force_color
                    .or_else(|| cell.color_tag())
                    .unwrap_or(opts.default_color);
                let piece = if idx == last {
                    text.to_string()
                } else {
                    format!("{text}{}", self.separator)
                };
                let start = from.saturating_sub(offset);
                surface.write_styled(slice_chars(&piece, start, to.saturating_sub(offset)), color);
            }
            offset += span;
            if offset > to {
                break;
            }
        }

        let rest_color = opts.force_color.unwrap_or(opts.default_color);
        surface.set_color(rest_color);
        if let Some(pad) = opts.pad {
            let (_, cur) = surface.cursor();
            if (cur as usize) < cols as usize {
                let count = cols as usize - cur as usize - 1;
                let fill: String = std::iter::repeat_n(pad, count).collect();
                surface.write_styled(&fill, rest_color);
            }
        }
        if opts.add_newline {
            surface.write_styled("\n", rest_color);
        }
    }
}

impl From<&str> for Row {
    fn from(text: &str) -> Self {
        Row::new().cell("default", Cell::new(text))
    }
}

impl From<String> for Row {
    fn from(text: String) -> Self {
        Row::new().cell("default", Cell::new(text))
    }
}

/// Characters `[start, end]` (inclusive, clamped) of `s`.
fn slice_chars(s: &str, start: usize, end_inclusive: usize) -> &str {
    if start > end_inclusive {
        return "";
    }
    let Some((begin, _)) = s.char_indices().nth(start) else {
        return "";
    };
    let end = s
        .char_indices()
        .nth(end_inclusive.saturating_add(1))
        .map_or(s.len(), |(i, _)| i);
    &s[begin..end]
}
