#![forbid(unsafe_code)]

//! A single styled text fragment within a row.

use std::cell::OnceCell;

use curtain_core::ColorTag;

/// Text justification inside a fixed-width cell.
///
/// Only meaningful when a fixed width is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Justify {
    /// Content at the start, padding after.
    #[default]
    Left,
    /// Padding before, content at the end.
    Right,
}

/// One cell of a [`Row`](crate::Row).
///
/// Rendering is deterministic and cached: the first call to [`render`]
/// computes the text, later calls return it unchanged until a property
/// setter invalidates the cache.
///
/// Fixed-width rendering keeps the prefix in preference to the body and
/// the suffix in preference to the truncated body; padding only ever
/// appears when prefix + body + suffix is strictly shorter than the
/// fixed width.
///
/// [`render`]: Cell::render
#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    color: Option<ColorTag>,
    prefix: String,
    suffix: String,
    fixed_width: Option<usize>,
    justify: Justify,
    pad_fill: String,
    rendered: OnceCell<String>,
}

impl Cell {
    /// Create a cell with the given text and default properties.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            prefix: String::new(),
            suffix: String::new(),
            fixed_width: None,
            justify: Justify::Left,
            pad_fill: " ".to_string(),
            rendered: OnceCell::new(),
        }
    }

    /// Set the cell's own color.
    #[must_use]
    pub fn color(mut self, color: ColorTag) -> Self {
        self.color = Some(color);
        self
    }

    /// Set a string prepended to the text.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set a string appended to the text.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Fix the rendered width to exactly `width` characters.
    #[must_use]
    pub fn fixed_width(mut self, width: usize) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// Set the justification used when the content is narrower than a
    /// fixed width.
    #[must_use]
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Set the pattern repeated (and truncated) to build padding.
    #[must_use]
    pub fn pad_fill(mut self, fill: impl Into<String>) -> Self {
        self.pad_fill = fill.into();
        self
    }

    /// The cell's own color, if any.
    #[must_use]
    pub fn color_tag(&self) -> Option<ColorTag> {
        self.color
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalidate();
    }

    /// Replace the color.
    pub fn set_color(&mut self, color: Option<ColorTag>) {
        self.color = color;
        self.invalidate();
    }

    /// Replace the prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
        self.invalidate();
    }

    /// Replace the suffix.
    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
        self.invalidate();
    }

    /// Replace the fixed width (`None` lifts the limit).
    pub fn set_fixed_width(&mut self, width: Option<usize>) {
        self.fixed_width = width;
        self.invalidate();
    }

    /// Replace the justification.
    pub fn set_justify(&mut self, justify: Justify) {
        self.justify = justify;
        self.invalidate();
    }

    /// Replace the padding pattern.
    pub fn set_pad_fill(&mut self, fill: impl Into<String>) {
        self.pad_fill = fill.into();
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.rendered.take();
    }

    /// Rendered text of this cell.
    pub fn render(&self) -> &str {
        self.rendered.get_or_init(|| self.compute())
    }

    /// Rendered width in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.render().chars().count()
    }

    fn compute(&self) -> String {
        let body_full = format!("{}{}", self.prefix, self.text);
        let Some(width) = self.fixed_width else {
            return format!("{body_full}{}", self.suffix);
        };
        let keep = width.saturating_sub(self.suffix.chars().count());
        let candidate = format!("{}{}", take_chars(&body_full, keep), self.suffix);
        let len = candidate.chars().count();
        if len < width {
            let padding = repeat_to(&self.pad_fill, width - len);
            match self.justify {
                Justify::Left => format!("{candidate}{padding}"),
                Justify::Right => format!("{padding}{candidate}"),
            }
        } else {
            take_chars(&candidate, width).to_string()
        }
    }
}

/// Leading `n` characters of `s`.
pub(crate) fn take_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(i, _)| &s[..i])
}

/// `pattern` repeated and truncated to exactly `n` characters.
///
/// An empty pattern yields no padding.
pub(crate) fn repeat_to(pattern: &str, n: usize) -> String {
    if pattern.is_empty() {
        return String::new();
    }
    pattern.chars().cycle().take(n).collect()
}
