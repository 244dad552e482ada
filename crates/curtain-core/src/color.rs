#![forbid(unsafe_code)]

//! Opaque color-pair names.
//!
//! The formatter and the menu engine only compare and forward these tags;
//! what a tag looks like on screen is decided by the [`Surface`]
//! implementation (see [`crate::tty`] for the terminal mapping).
//!
//! [`Surface`]: crate::Surface

/// Named color pair for styled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    /// Menu title and footer chrome.
    Title,
    /// Plain, action-less rows.
    Line,
    /// Rows that carry at least one action.
    MenuItem,
    /// The currently selected row.
    MenuItemSelected,
    /// Input prompts.
    Input,
    /// Green accent.
    Green,
    /// Red accent.
    Red,
    /// Yellow accent.
    Yellow,
    /// Blue accent.
    Blue,
    /// White accent.
    White,
}

impl Default for ColorTag {
    fn default() -> Self {
        Self::Line
    }
}
