//! Lazy titles: producers run once, when the item first becomes visible.
//!
//! Scroll down: the lazy items past the first page get their timestamp
//! only when they first appear, and keep it until the menu is refreshed.

use std::time::{SystemTime, UNIX_EPOCH};

use curtain::{Menu, Result, Signal};

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

fn main() -> Result<()> {
    Menu::new("Menu items using lazy rendering").run(|menu| {
        for _ in 0..40 {
            menu.item(format!("I am a normal item, rendered at {}", now_millis()));
            menu.lazy_item(|| format!("I am a lazy item, rendered at   {}", now_millis()));
        }
        menu.item("Refresh menu").on_select(|| Signal::Refresh);
    })
}
