//! Scripted sessions: determinism and full-session replay.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{run, scripted};
use curtain::{Key, MenuBuilder, Signal};

fn counter_menu(counter: Rc<Cell<i32>>) -> impl FnMut(&mut MenuBuilder) {
    move |menu| {
        let up = counter.clone();
        menu.item(format!("Current number is {}", counter.get()))
            .action('d', "Increase", move || {
                up.set(up.get() + 1);
                Signal::Refresh
            });
        menu.item("Quit").on_select(|| Signal::Exit);
    }
}

#[test]
fn identical_scripts_capture_identical_screens() {
    let script = [
        Key::Char('d'),
        Key::Char('d'),
        Key::Down,
        Key::Up,
        Key::Char('d'),
        Key::Right,
        Key::Left,
    ];
    let mut screens = Vec::new();
    for _ in 0..2 {
        let (replay, surface) = scripted(script);
        run(
            "Deterministic menu",
            &replay,
            &surface,
            counter_menu(Rc::new(Cell::new(0))),
        );
        screens.push(surface.borrow().screen());
    }
    assert_eq!(screens[0], screens[1]);
}

#[test]
fn a_whole_session_runs_from_a_script() {
    let counter = Rc::new(Cell::new(0));
    let (replay, surface) = scripted([Key::Char('d'), Key::Char('d'), Key::Char('d')]);
    run("Scripted menu", &replay, &surface, counter_menu(counter.clone()));
    assert_eq!(counter.get(), 3);
    assert_eq!(common::line(&surface, 3), "Current number is 3");
    assert!(replay.is_empty());
}

#[test]
fn replay_has_priority_over_the_device() {
    // The capture surface errors on a device read, so a session that
    // finishes its script cleanly proves the queue was consumed first.
    let (replay, surface) = scripted([Key::Down, Key::Up]);
    run("Queue priority", &replay, &surface, |menu| {
        menu.item("Menu item 1");
        menu.item("Menu item 2");
    });
    assert!(replay.is_empty());
}
