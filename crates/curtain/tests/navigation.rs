//! Basic navigation: drawing, selection movement, and the footer.

mod common;

use common::{PAGE, line, line_from_bottom, run_menu};
use curtain::{ColorTag, Key, Signal};

#[test]
fn displays_a_menu_with_one_item() {
    let surface = run_menu([], |menu| {
        menu.item("Menu item");
    });
    assert_eq!(line(&surface, 1), "= Menu title");
    assert_eq!(line(&surface, 3), "Menu item");
    assert_eq!(
        line_from_bottom(&surface, 0),
        "= Arrows/Home/End: Navigate | Esc: Exit"
    );
}

#[test]
fn displays_a_menu_with_several_items() {
    let surface = run_menu([], |menu| {
        menu.item("Menu item 1");
        menu.item("Menu item 2");
        menu.item("Menu item 3");
    });
    assert_eq!(line(&surface, 3), "Menu item 1");
    assert_eq!(line(&surface, 4), "Menu item 2");
    assert_eq!(line(&surface, 5), "Menu item 3");
}

#[test]
fn title_chrome_uses_the_title_color() {
    let surface = run_menu([], |menu| {
        menu.item("Menu item");
    });
    let captured = surface.borrow();
    // Padding always stops one short of the right edge.
    for (ch, color) in &captured.row_cells(0)[..common::COLS as usize - 1] {
        assert_eq!(*ch, '=');
        assert_eq!(*color, ColorTag::Title);
    }
    assert_eq!(captured.color_at(1, 0), ColorTag::Title);
}

#[test]
fn lists_all_actions_of_the_selected_item_in_the_footer() {
    let surface = run_menu([], |menu| {
        menu.item("Menu item")
            .action('a', "First action", || Signal::Continue)
            .action('b', "Second action", || Signal::Continue);
    });
    assert_eq!(
        line_from_bottom(&surface, 0),
        "= Arrows/Home/End: Navigate | Esc: Exit | a: First action | b: Second action"
    );
}

#[test]
fn down_key_moves_the_selection() {
    let surface = run_menu([Key::Down, Key::Down], |menu| {
        menu.item("Menu item 1");
        menu.item("Menu item 2");
        menu.item("Menu item 3")
            .action('a', "Special action", || Signal::Continue);
        menu.item("Menu item 4");
    });
    assert_eq!(
        line_from_bottom(&surface, 0),
        "= Arrows/Home/End: Navigate | Esc: Exit | a: Special action"
    );
}

#[test]
fn end_key_jumps_to_the_last_item() {
    let surface = run_menu([Key::End], |menu| {
        menu.item("Menu item 1");
        menu.item("Menu item 2");
        menu.item("Menu item 3");
        menu.item("Menu item 4")
            .action('a', "Special action", || Signal::Continue);
    });
    assert_eq!(
        line_from_bottom(&surface, 0),
        "= Arrows/Home/End: Navigate | Esc: Exit | a: Special action"
    );
}

#[test]
fn up_key_moves_back() {
    let surface = run_menu([Key::End, Key::Up], |menu| {
        menu.item("Menu item 1");
        menu.item("Menu item 2");
        menu.item("Menu item 3")
            .action('a', "Special action", || Signal::Continue);
        menu.item("Menu item 4");
    });
    assert_eq!(
        line_from_bottom(&surface, 0),
        "= Arrows/Home/End: Navigate | Esc: Exit | a: Special action"
    );
}

#[test]
fn home_key_jumps_to_the_first_item() {
    let surface = run_menu([Key::End, Key::Home], |menu| {
        menu.item("Menu item 1")
            .action('a', "Special action", || Signal::Continue);
        menu.item("Menu item 2");
        menu.item("Menu item 3");
        menu.item("Menu item 4");
    });
    assert_eq!(
        line_from_bottom(&surface, 0),
        "= Arrows/Home/End: Navigate | Esc: Exit | a: Special action"
    );
}

#[test]
fn up_key_clamps_at_the_first_item() {
    let surface = run_menu([Key::Up, Key::Up], |menu| {
        menu.item("Menu item 1")
            .action('a', "Special action", || Signal::Continue);
        menu.item("Menu item 2");
    });
    assert_eq!(
        line_from_bottom(&surface, 0),
        "= Arrows/Home/End: Navigate | Esc: Exit | a: Special action"
    );
}

#[test]
fn down_key_clamps_at_the_last_item() {
    let surface = run_menu([Key::Down, Key::Down, Key::Down], |menu| {
        menu.item("Menu item 1");
        menu.item("Menu item 2")
            .action('a', "Special action", || Signal::Continue);
    });
    assert_eq!(
        line_from_bottom(&surface, 0),
        "= Arrows/Home/End: Navigate | Esc: Exit | a: Special action"
    );
}

#[test]
fn right_key_scrolls_the_view_horizontally() {
    let surface = run_menu([Key::Right, Key::Right], |menu| {
        menu.item("Menu item");
    });
    assert_eq!(line(&surface, 3), "nu item");
    assert_eq!(
        line_from_bottom(&surface, 0),
        "Arrows/Home/End: Navigate | Esc: Exit"
    );
}

#[test]
fn left_key_scrolls_back() {
    let surface = run_menu([Key::Right, Key::Right, Key::Left], |menu| {
        menu.item("Menu item");
    });
    assert_eq!(line(&surface, 3), "enu item");
    assert_eq!(
        line_from_bottom(&surface, 0),
        "Arrows/Home/End: Navigate | Esc: Exit"
    );
}

#[test]
fn left_key_clamps_at_the_row_start() {
    let surface = run_menu([Key::Left, Key::Left, Key::Right], |menu| {
        menu.item("Menu item");
    });
    assert_eq!(line(&surface, 3), "enu item");
}

#[test]
fn page_down_selects_one_page_further() {
    let surface = run_menu([Key::PageDown], |menu| {
        for idx in 0..PAGE * 2 {
            let handle = menu.item(format!("Menu item {idx}"));
            if idx == PAGE - 1 {
                handle.action('a', format!("Special action {idx}"), || Signal::Continue);
            }
        }
    });
    assert_eq!(
        line_from_bottom(&surface, 0),
        format!(
            "= Arrows/Home/End: Navigate | Esc: Exit | a: Special action {}",
            PAGE - 1
        )
    );
}

#[test]
fn page_up_selects_one_page_back() {
    let surface = run_menu([Key::End, Key::PageUp], |menu| {
        for idx in 0..PAGE * 2 {
            let handle = menu.item(format!("Menu item {idx}"));
            if idx == PAGE {
                handle.action('a', format!("Special action {idx}"), || Signal::Continue);
            }
        }
    });
    assert_eq!(
        line_from_bottom(&surface, 0),
        format!(
            "= Arrows/Home/End: Navigate | Esc: Exit | a: Special action {PAGE}"
        )
    );
}

#[test]
fn selected_row_is_highlighted_and_padded() {
    let surface = run_menu([], |menu| {
        menu.item("Menu item 1");
        menu.item("Menu item 2");
    });
    let captured = surface.borrow();
    for (_, color) in &captured.row_cells(3)[..common::COLS as usize - 1] {
        assert_eq!(*color, ColorTag::MenuItemSelected);
    }
    assert_eq!(captured.color_at(4, 0), ColorTag::Line);
}
