//! Everything the row formatter can do: colors, prefixes/suffixes,
//! fixed widths, justification, padding, separators, and rows mutated
//! in place between refreshes.

use std::cell::RefCell;
use std::rc::Rc;

use curtain::{Cell, ColorTag, Justify, Menu, Result, Row, Signal};

fn main() -> Result<()> {
    let reorder_row = Rc::new(RefCell::new(
        Row::new()
            .cell("first_cell", Cell::new("Select to"))
            .cell("second_cell", Cell::new("change the").color(ColorTag::Green))
            .cell("third_cell", Cell::new("cells order").color(ColorTag::Red)),
    ));
    let restyle_row = Rc::new(RefCell::new(
        Row::new()
            .cell("first_cell", Cell::new("Select to change"))
            .cell(
                "second_cell",
                Cell::new("the cells properties")
                    .color(ColorTag::Green)
                    .fixed_width(40),
            ),
    ));
    let step = Rc::new(std::cell::Cell::new(0usize));
    let order_step = Rc::new(std::cell::Cell::new(0usize));

    Menu::new("Extended formatting available too!").run(move |menu| {
        menu.item(Row::new().cell(
            "default_cell",
            Cell::new("Simple color change - GREEN!").color(ColorTag::Green),
        ));
        menu.item(
            Row::new()
                .cell("green_cell", Cell::new("Several cells ").color(ColorTag::Green))
                .cell("red_cell", Cell::new("with different ").color(ColorTag::Red))
                .cell("blue_cell", Cell::new("formatting").color(ColorTag::Blue)),
        );
        menu.item(Row::new().cell(
            "default_cell",
            Cell::new("Use prefixes and suffixes").prefix("[ ").suffix(" ]"),
        ));
        menu.item(
            Row::new()
                .cell(
                    "first_cell",
                    Cell::new("This will have a fixed size!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!")
                        .prefix("[ ")
                        .suffix(" ]")
                        .fixed_width(40),
                )
                .cell(
                    "second_cell",
                    Cell::new("And other cells will be aligned").color(ColorTag::Green),
                ),
        );
        menu.item(
            Row::new()
                .cell("first_cell", Cell::new("Pretty nice").fixed_width(40))
                .cell(
                    "second_cell",
                    Cell::new("for alignment").color(ColorTag::Green),
                ),
        );
        menu.item(
            Row::new()
                .cell(
                    "first_cell",
                    Cell::new("And you can justify")
                        .justify(Justify::Right)
                        .fixed_width(40),
                )
                .cell(
                    "second_cell",
                    Cell::new("your text when size is fixed!")
                        .justify(Justify::Left)
                        .color(ColorTag::Green),
                ),
        );
        menu.item(
            Row::new()
                .cell(
                    "first_cell",
                    Cell::new("You can even")
                        .justify(Justify::Right)
                        .fixed_width(40)
                        .pad_fill("_-"),
                )
                .cell(
                    "second_cell",
                    Cell::new("pad it!")
                        .justify(Justify::Left)
                        .color(ColorTag::Green)
                        .fixed_width(40)
                        .pad_fill("*"),
                ),
        );
        menu.item(
            Row::with_separator("|")
                .cell("first_cell", Cell::new("Use a"))
                .cell(
                    "second_cell",
                    Cell::new("different separator").color(ColorTag::Green),
                )
                .cell("third_cell", Cell::new("between cells")),
        );

        let shuffle = reorder_row.clone();
        let turn = order_step.clone();
        menu.item(reorder_row.borrow().clone()).on_select(move || {
            // Rotate the cell order on each selection.
            let orders = [
                ["third_cell", "first_cell", "second_cell"],
                ["second_cell", "third_cell", "first_cell"],
                ["first_cell", "second_cell", "third_cell"],
            ];
            let n = turn.get();
            turn.set(n + 1);
            shuffle.borrow_mut().reorder(&orders[n % orders.len()], None);
            Signal::Refresh
        });

        let restyle = restyle_row.clone();
        let tick = step.clone();
        menu.item(restyle_row.borrow().clone()).on_select(move || {
            let palette = [ColorTag::Green, ColorTag::Red, ColorTag::Blue];
            let fills = ["*", " ", "|", "="];
            let n = tick.get();
            tick.set(n + 1);
            let mut row = restyle.borrow_mut();
            row.update_cell("first_cell", |cell| {
                cell.set_color(Some(palette[n % palette.len()]));
            })
            .ok();
            row.update_cell("second_cell", |cell| {
                cell.set_color(Some(palette[(n + 1) % palette.len()]));
                cell.set_pad_fill(fills[n % fills.len()]);
            })
            .ok();
            Signal::Refresh
        });

        menu.item("Quit").on_select(|| {
            println!("Quitting...");
            Signal::Exit
        });
    })
}
