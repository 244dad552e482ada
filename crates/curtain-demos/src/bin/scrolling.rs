//! A menu big enough to scroll in every direction.

use curtain::{Menu, Result, Signal};

fn main() -> Result<()> {
    Menu::new("Use all arrows, Page up/down, Home and End keys!").run(|menu| {
        menu.item("Quit").on_select(|| Signal::Exit);
        menu.item("That's a big menu item! ".repeat(20));
        for idx in 0..1000 {
            menu.item(format!("Menu item {idx}"));
        }
    })
}
