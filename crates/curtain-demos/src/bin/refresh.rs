//! Items rebuilt every time an action reports a refresh.

use std::cell::Cell;
use std::rc::Rc;

use curtain::{Menu, Result, Signal};

fn main() -> Result<()> {
    let number = Rc::new(Cell::new(0));
    let switch = Rc::new(Cell::new(false));
    Menu::new("Menu being refreshed when selecting things").run(move |menu| {
        let up = number.clone();
        menu.item(format!(
            "Current number is {} - Select me for +1",
            number.get()
        ))
        .on_select(move || {
            up.set(up.get() + 1);
            Signal::Refresh
        });
        let down = number.clone();
        menu.item(format!(
            "Current number is {} - Select me for -1",
            number.get()
        ))
        .on_select(move || {
            down.set(down.get() - 1);
            Signal::Refresh
        });
        let toggle = switch.clone();
        menu.item(format!(
            "[{}] Switch me!",
            if switch.get() { '*' } else { ' ' }
        ))
        .on_select(move || {
            toggle.set(!toggle.get());
            Signal::Refresh
        });
        menu.item("Quit").on_select(|| {
            println!("Quitting...");
            Signal::Exit
        });
    })
}
