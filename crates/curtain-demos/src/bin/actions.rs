//! One item carrying several shortcut actions.

use std::cell::Cell;
use std::rc::Rc;

use curtain::{Menu, Result, Signal};

fn main() -> Result<()> {
    let number = Rc::new(Cell::new(0));
    Menu::new("Items can have several actions. Look at the footer!").run(move |menu| {
        let up = number.clone();
        let down = number.clone();
        menu.item(format!("Current number is {} - Use a or d", number.get()))
            .action('d', "Increase", move || {
                up.set(up.get() + 1);
                Signal::Refresh
            })
            .action('a', "Decrease", move || {
                down.set(down.get() - 1);
                Signal::Refresh
            });
        menu.item("Quit").on_select(|| {
            println!("Quitting...");
            Signal::Exit
        });
    })
}
