//! Sub-menus are ordinary recursion: an action runs another menu.

use curtain::{Menu, Result, Signal};

fn sub_menu(title: &str, line: &'static str) -> Result<()> {
    Menu::new(title).run(move |menu| {
        menu.item(line);
        menu.item("Back").on_select(|| Signal::Exit);
    })
}

fn main() -> Result<()> {
    Menu::new("Top menu").run(|menu| {
        menu.item("Enter menu 1").on_select(|| {
            sub_menu("Sub-menu 1", "We are in sub-menu 1").ok();
            Signal::Continue
        });
        menu.item("Enter menu 2").on_select(|| {
            sub_menu("Sub-menu 2", "We are in sub-menu 2").ok();
            Signal::Continue
        });
        menu.item("Quit").on_select(|| {
            println!("Quitting...");
            Signal::Exit
        });
    })
}
