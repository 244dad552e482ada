#![forbid(unsafe_code)]

//! Error types shared across the curtain crates.

use std::fmt;
use std::io;

/// Top-level error type for curtain menus.
#[derive(Debug)]
pub enum Error {
    /// I/O failure during terminal operations.
    Io(io::Error),
    /// A menu's population callback produced no items.
    EmptyMenu(String),
    /// A row operation referenced a cell id that does not exist.
    UnknownCell(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::EmptyMenu(title) => write!(f, "menu {title} has no items to select"),
            Self::UnknownCell(id) => write!(f, "unknown cell {id}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for curtain APIs.
pub type Result<T> = std::result::Result<T, Error>;
