//! A few items, some of them without any action.

use std::io::{BufRead, Write};

use curtain::{Menu, Result, Signal};

fn pause(message: &str) {
    println!("{message} Press enter to continue.");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}

fn main() -> Result<()> {
    Menu::new("We have several items, some of them have no action").run(|menu| {
        menu.item("Nothing to do with me");
        menu.item("Select me - I'm option A!").on_select(|| {
            pause("You have selected A.");
            Signal::Continue
        });
        menu.item("Or select me - Option B!").on_select(|| {
            pause("You have selected B.");
            Signal::Continue
        });
        menu.item("---- Separator");
        menu.item("Quit").on_select(|| {
            println!("Quitting...");
            Signal::Exit
        });
    })
}
