#![forbid(unsafe_code)]

//! Canonical key codes for menu input.
//!
//! The menu engine only ever sees a [`Key`]; mapping from the terminal
//! backend's richer event stream (modifiers, repeats, releases) happens
//! here, at the edge. Any `Key` can be bound as an action shortcut, and
//! its [`Display`](std::fmt::Display) impl is the label the engine shows
//! in the footer.

use std::fmt;

/// A pressed key, as delivered to the menu engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A regular character key.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Function key (F1-F24).
    F(u8),
}

impl Key {
    /// Convert a crossterm key event into a [`Key`].
    ///
    /// Returns `None` for key releases and for codes the menu has no use
    /// for. Repeats are kept: holding an arrow key should keep scrolling.
    #[must_use]
    pub fn from_crossterm(event: crossterm::event::KeyEvent) -> Option<Self> {
        use crossterm::event::{KeyCode, KeyEventKind};

        if event.kind == KeyEventKind::Release {
            return None;
        }
        match event.code {
            KeyCode::Char(c) => Some(Self::Char(c)),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Esc => Some(Self::Escape),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Tab => Some(Self::Tab),
            KeyCode::Delete => Some(Self::Delete),
            KeyCode::Insert => Some(Self::Insert),
            KeyCode::Home => Some(Self::Home),
            KeyCode::End => Some(Self::End),
            KeyCode::PageUp => Some(Self::PageUp),
            KeyCode::PageDown => Some(Self::PageDown),
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::Left => Some(Self::Left),
            KeyCode::Right => Some(Self::Right),
            KeyCode::F(n) => Some(Self::F(n)),
            _ => None,
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// Footer label for the key.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Enter => write!(f, "Enter"),
            Self::Escape => write!(f, "Esc"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Tab => write!(f, "Tab"),
            Self::Delete => write!(f, "Del"),
            Self::Insert => write!(f, "Ins"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::PageUp => write!(f, "PgUp"),
            Self::PageDown => write!(f, "PgDn"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
            Self::F(n) => write!(f, "F{n}"),
        }
    }
}
