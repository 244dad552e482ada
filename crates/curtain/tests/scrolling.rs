//! Vertical paging and horizontal windowing over long content.

mod common;

use common::{COLS, PAGE, line, line_from_bottom, run_menu};
use curtain::Key;

#[test]
fn long_items_never_span_more_than_one_line() {
    let cols = COLS as usize;
    let surface = run_menu([], move |menu| {
        menu.item("1".repeat(cols * 2));
        menu.item("Menu item 2");
    });
    assert_eq!(line(&surface, 3), "1".repeat(cols - 1));
    assert_eq!(line(&surface, 4), "Menu item 2");
}

#[test]
fn right_key_scrolls_long_rows() {
    let cols = COLS as usize;
    let surface = run_menu([Key::Right, Key::Right, Key::Right], move |menu| {
        menu.item(format!("abcde{}23456789", "1".repeat(cols - 5)));
    });
    assert_eq!(line(&surface, 3), format!("de{}23", "1".repeat(cols - 5)));
}

#[test]
fn left_key_scrolls_back_through_long_rows() {
    let cols = COLS as usize;
    let surface = run_menu(
        [Key::Right, Key::Right, Key::Right, Key::Left],
        move |menu| {
            menu.item(format!("abcde{}23456789", "1".repeat(cols - 5)));
        },
    );
    assert_eq!(line(&surface, 3), format!("cde{}2", "1".repeat(cols - 5)));
}

#[test]
fn down_key_scrolls_the_page() {
    let surface = run_menu([Key::PageDown, Key::Down, Key::Down], |menu| {
        for idx in 0..PAGE * 2 {
            menu.item(format!("Menu item {idx}"));
        }
    });
    assert_eq!(line(&surface, 3), "Menu item 2");
    assert_eq!(
        line_from_bottom(&surface, 2),
        format!("Menu item {}", PAGE + 1)
    );
}

#[test]
fn up_key_scrolls_the_page_back() {
    let surface = run_menu([Key::End, Key::PageUp, Key::Up, Key::Up], |menu| {
        for idx in 0..PAGE * 2 {
            menu.item(format!("Menu item {idx}"));
        }
    });
    assert_eq!(line(&surface, 3), format!("Menu item {}", PAGE - 2));
    assert_eq!(
        line_from_bottom(&surface, 2),
        format!("Menu item {}", 2 * PAGE - 3)
    );
}

#[test]
fn page_down_advances_a_whole_page() {
    let surface = run_menu([Key::PageDown, Key::PageDown], |menu| {
        for idx in 0..PAGE * 3 {
            menu.item(format!("Menu item {idx}"));
        }
    });
    assert_eq!(line(&surface, 3), format!("Menu item {}", PAGE - 1));
    assert_eq!(
        line_from_bottom(&surface, 2),
        format!("Menu item {}", PAGE * 2 - 2)
    );
}

#[test]
fn page_up_goes_back_a_whole_page() {
    let surface = run_menu([Key::End, Key::PageUp, Key::PageUp], |menu| {
        for idx in 0..PAGE * 3 {
            menu.item(format!("Menu item {idx}"));
        }
    });
    assert_eq!(line(&surface, 3), format!("Menu item {}", PAGE + 1));
    assert_eq!(
        line_from_bottom(&surface, 2),
        format!("Menu item {}", PAGE * 2)
    );
}

#[test]
fn end_key_shows_the_last_page() {
    let surface = run_menu([Key::End], |menu| {
        for idx in 0..PAGE * 2 {
            menu.item(format!("Menu item {idx}"));
        }
    });
    assert_eq!(line(&surface, 3), format!("Menu item {PAGE}"));
    assert_eq!(
        line_from_bottom(&surface, 2),
        format!("Menu item {}", PAGE * 2 - 1)
    );
}

#[test]
fn home_key_shows_the_first_page_again() {
    let surface = run_menu([Key::End, Key::Home], |menu| {
        for idx in 0..PAGE * 3 {
            menu.item(format!("Menu item {idx}"));
        }
    });
    assert_eq!(line(&surface, 3), "Menu item 0");
    assert_eq!(
        line_from_bottom(&surface, 2),
        format!("Menu item {}", PAGE - 1)
    );
}
