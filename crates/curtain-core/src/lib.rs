#![forbid(unsafe_code)]

//! Core terminal layer: key codes, color tags, and the display surface.
//!
//! The menu engine in the `curtain` crate never talks to a terminal
//! directly. Everything it needs from one is captured by the [`Surface`]
//! trait; [`TermSurface`] is the crossterm-backed implementation used for
//! real sessions, and the `curtain-harness` crate provides an in-memory
//! one for deterministic tests.

pub mod color;
pub mod error;
pub mod key;
pub mod surface;
pub mod tty;

pub use color::ColorTag;
pub use error::{Error, Result};
pub use key::Key;
pub use surface::Surface;
pub use tty::TermSurface;
