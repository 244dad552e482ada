#![forbid(unsafe_code)]

//! Crossterm-backed [`Surface`] for real terminal sessions.
//!
//! Lifecycle discipline:
//!
//! 1. `acquire` enters raw mode, switches to the alternate screen, hides
//!    the cursor and clears.
//! 2. `release` undoes all of that in reverse order and flushes.
//! 3. [`Drop`] calls `release`, so the terminal is restored on every exit
//!    path, including unwinding.
//! 4. A process-wide panic hook (installed once) performs a best-effort
//!    restore before the panic message prints, so a panicking producer
//!    callback never leaves the shell in raw mode.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::queue;
use crossterm::style::{Color, Colors, Print, ResetColor, SetColors};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use unicode_width::UnicodeWidthStr;

use crate::color::ColorTag;
use crate::key::Key;
use crate::surface::Surface;

/// A [`Surface`] over the process's controlling terminal.
///
/// Only one acquired `TermSurface` should exist at a time; the menu
/// engine's release-around-callbacks discipline maintains that even when
/// menus nest.
#[derive(Debug)]
pub struct TermSurface {
    rows: u16,
    cols: u16,
    cursor: (u16, u16),
    acquired: bool,
}

impl TermSurface {
    /// Create an unacquired surface. The terminal is untouched until
    /// [`Surface::acquire`] is called.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cursor: (0, 0),
            acquired: false,
        }
    }

    fn colors_for(tag: ColorTag) -> Colors {
        match tag {
            ColorTag::Title => Colors::new(Color::Black, Color::DarkCyan),
            ColorTag::Line => Colors::new(Color::Grey, Color::Black),
            ColorTag::MenuItem => Colors::new(Color::Grey, Color::Black),
            ColorTag::MenuItemSelected => Colors::new(Color::Black, Color::Grey),
            ColorTag::Input => Colors::new(Color::Grey, Color::DarkBlue),
            ColorTag::Green => Colors::new(Color::DarkGreen, Color::Black),
            ColorTag::Red => Colors::new(Color::DarkRed, Color::Black),
            ColorTag::Yellow => Colors::new(Color::DarkYellow, Color::Black),
            ColorTag::Blue => Colors::new(Color::DarkBlue, Color::Black),
            ColorTag::White => Colors::new(Color::Grey, Color::Black),
        }
    }
}

impl Default for TermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TermSurface {
    fn dimensions(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn set_cursor(&mut self, row: u16, col: u16) {
        self.cursor = (row, col);
        let _ = queue!(io::stdout(), MoveTo(col, row));
    }

    fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    fn write_styled(&mut self, text: &str, color: ColorTag) {
        let mut stdout = io::stdout();
        let _ = queue!(stdout, SetColors(Self::colors_for(color)));
        let mut first = true;
        for segment in text.split('\n') {
            if !first {
                // Raw mode: a bare newline does not return the carriage.
                let (row, _) = self.cursor;
                self.cursor = (row.saturating_add(1), 0);
                let _ = queue!(stdout, MoveTo(0, self.cursor.0));
            }
            first = false;
            if !segment.is_empty() {
                let _ = queue!(stdout, Print(segment));
                let (row, col) = self.cursor;
                self.cursor = (row, col.saturating_add(segment.width() as u16));
            }
        }
    }

    fn set_color(&mut self, color: ColorTag) {
        let _ = queue!(io::stdout(), SetColors(Self::colors_for(color)));
    }

    fn read_key(&mut self) -> io::Result<Option<Key>> {
        // Present everything queued for this frame before polling.
        io::stdout().flush()?;
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(Key::from_crossterm(key)),
            Event::Resize(cols, rows) => {
                self.cols = cols;
                self.rows = rows;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn clear(&mut self) {
        self.cursor = (0, 0);
        let _ = queue!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }

    fn acquire(&mut self) -> io::Result<()> {
        install_panic_hook();
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        queue!(stdout, EnterAlternateScreen, Hide)?;
        let (cols, rows) = terminal::size()?;
        self.cols = cols;
        self.rows = rows;
        self.acquired = true;
        self.clear();
        stdout.flush()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(rows, cols, "terminal surface acquired");
        Ok(())
    }

    fn release(&mut self) {
        if !self.acquired {
            return;
        }
        self.acquired = false;
        let mut stdout = io::stdout();
        let _ = queue!(stdout, ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = stdout.flush();
        #[cfg(feature = "tracing")]
        tracing::debug!("terminal surface released");
    }
}

impl Drop for TermSurface {
    fn drop(&mut self) {
        self.release();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_restore();
            previous(info);
        }));
    });
}

fn best_effort_restore() {
    let mut stdout = io::stdout();
    let _ = queue!(stdout, ResetColor, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = stdout.flush();
}
