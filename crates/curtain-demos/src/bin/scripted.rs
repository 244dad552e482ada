//! A menu driven entirely by a pre-recorded key script, sub-menu
//! included: nested menus consume the same queue as their parent.

use curtain::{Key, Menu, ReplayKeys, Result, Signal};

fn main() -> Result<()> {
    let keys: ReplayKeys = [
        // Select the first item.
        Key::Enter,
        // Select the second one, then run both of its actions.
        Key::Down,
        Key::Char('a'),
        Key::Char('b'),
        // Open the sub-menu and select inside it.
        Key::Down,
        Key::Enter,
        Key::Enter,
        // Leave the sub-menu.
        Key::Escape,
        // Navigate a bit.
        Key::PageDown,
        Key::Home,
        // Select the last item (Quit).
        Key::End,
        Key::Enter,
    ]
    .into_iter()
    .collect();

    let sub_keys = keys.clone();
    Menu::new("Menu being used automatically")
        .keys(keys)
        .run(move |menu| {
            menu.item("Simple item").on_select(|| {
                println!("Selected a simple item");
                Signal::Continue
            });
            menu.item("Several actions on this item")
                .action('a', "Action A", || {
                    println!("Selected action A");
                    Signal::Continue
                })
                .action('b', "Action B", || {
                    println!("Selected action B");
                    Signal::Continue
                });
            let sub_keys = sub_keys.clone();
            menu.item("Sub-menu").on_select(move || {
                Menu::new("Sub-menu!")
                    .keys(sub_keys.clone())
                    .run(|sub_menu| {
                        sub_menu.item("Simple sub-menu item").on_select(|| {
                            println!("Selected item from sub-menu");
                            Signal::Continue
                        });
                    })
                    .ok();
                Signal::Continue
            });
            menu.item("Quit").on_select(|| {
                println!("Quitting...");
                Signal::Exit
            });
        })
}
