//! Scripted kanban board: a few pointer gestures run through the drag engine and applied to the
//! board. Run with `RUST_LOG=egui_reorder=trace cargo run --example kanban` to see every step.

use egui::{Pos2, Rect, Vec2};
use egui_reorder::{
    Collections, DragCallbacks, DragDropContext, DragDropOptions, DropZone,
    collection_integrity_issues,
};

const COLUMNS: [&str; 3] = ["todo", "doing", "done"];
const COLUMN_WIDTH: f32 = 160.0;
const COLUMN_GAP: f32 = 20.0;
const CARD_HEIGHT: f32 = 32.0;

fn column_x(column: usize) -> f32 {
    column as f32 * (COLUMN_WIDTH + COLUMN_GAP)
}

/// What the presentation layer would measure after laying the board out.
fn measure(board: &Collections) -> Vec<DropZone> {
    COLUMNS
        .iter()
        .enumerate()
        .map(|(column, id)| {
            let x = column_x(column);
            let len = board.len_of(id).unwrap_or(0);
            let cards = (0..len)
                .map(|row| {
                    Rect::from_min_size(
                        Pos2::new(x, row as f32 * CARD_HEIGHT),
                        Vec2::new(COLUMN_WIDTH, CARD_HEIGHT),
                    )
                })
                .collect();
            DropZone::new(
                *id,
                Rect::from_min_size(Pos2::new(x, 0.0), Vec2::new(COLUMN_WIDTH, 600.0)),
                cards,
            )
        })
        .collect()
}

fn print_board(board: &Collections) {
    for id in COLUMNS {
        println!("  {id:>6}: {:?}", board.get(id).unwrap_or_default());
    }
}

/// Pick up the card at `(column, row)`, move through `path`, then release (or cancel).
fn gesture(
    ctx: &mut DragDropContext,
    board: &mut Collections,
    (column, row): (usize, usize),
    path: &[Pos2],
    cancel: bool,
) {
    let id = COLUMNS[column];
    let Some(item) = board.get(id).and_then(|items| items.get(row)).cloned() else {
        log::warn!("no card at {id}[{row}]");
        return;
    };
    if let Err(err) = ctx.droppable(id).drag_start(item, row) {
        log::error!("{err}");
        return;
    }

    let zones = measure(board);
    for &pointer in path {
        ctx.drag_move(pointer, &zones);
    }

    if cancel {
        ctx.cancel();
        println!("cancelled");
        return;
    }

    let Some(result) = ctx.end() else {
        return;
    };
    match board.apply(&result) {
        Ok(instruction) => println!("{instruction:?}"),
        Err(err) => log::error!("could not apply {result:?}: {err}"),
    }
}

fn main() {
    env_logger::init();

    let mut board = Collections::new()
        .with("todo", ["design", "parser", "docs", "release"])
        .with("doing", ["tests"])
        .with("done", Vec::<String>::new());

    let callbacks = DragCallbacks::default()
        .on_before_drag_start(|start| {
            println!("pick up {} from {}", start.item_id, start.source);
        })
        .on_drag_end(|result| match &result.destination {
            Some(destination) => println!("drop {} at {destination}", result.item_id),
            None => println!("drop {} outside any list", result.item_id),
        });
    let options = DragDropOptions {
        debug_event_log: true,
        ..Default::default()
    };
    let mut ctx = DragDropContext::new(options).with_observer(callbacks);

    println!("initial:");
    print_board(&board);

    let middle = |column: usize| column_x(column) + COLUMN_WIDTH / 2.0;

    // "parser" moves down inside `todo`, below "release".
    gesture(
        &mut ctx,
        &mut board,
        (0, 1),
        &[Pos2::new(middle(0), 60.0), Pos2::new(middle(0), 150.0)],
        false,
    );
    // "design" goes to `done`, crossing the gap between columns.
    gesture(
        &mut ctx,
        &mut board,
        (0, 0),
        &[
            Pos2::new(column_x(1) - COLUMN_GAP / 2.0, 10.0),
            Pos2::new(middle(2), 10.0),
        ],
        false,
    );
    // "tests" is dropped between columns: nothing changes.
    gesture(
        &mut ctx,
        &mut board,
        (1, 0),
        &[Pos2::new(column_x(2) - COLUMN_GAP / 2.0, 10.0)],
        false,
    );
    // Escape pressed while dragging "docs".
    gesture(
        &mut ctx,
        &mut board,
        (0, 0),
        &[Pos2::new(middle(1), 100.0)],
        true,
    );

    println!("final:");
    print_board(&board);

    let issues = collection_integrity_issues(&board);
    if !issues.is_empty() {
        log::error!("{}", issues.join("\n"));
    }

    println!("debug log:\n{}", ctx.debug_log_text());
}
