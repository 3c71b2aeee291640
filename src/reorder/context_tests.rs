use std::cell::RefCell;
use std::rc::Rc;

use egui::{Pos2, Rect, Vec2};

use super::{
    BeginPolicy, DragCallbacks, DragDropContext, DragDropError, DragDropOptions, DragObserver,
    DragStart, DragUpdate, DropResult, DropZone, ItemBounds, Location,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    BeforeStart(DragStart),
    Update(DragUpdate),
    End(DropResult),
}

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<Event>>>);

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }
}

impl DragObserver for Recorder {
    fn on_before_drag_start(&mut self, start: &DragStart) {
        self.0.borrow_mut().push(Event::BeforeStart(start.clone()));
    }

    fn on_drag_update(&mut self, update: &DragUpdate) {
        self.0.borrow_mut().push(Event::Update(update.clone()));
    }

    fn on_drag_end(&mut self, result: &DropResult) {
        self.0.borrow_mut().push(Event::End(result.clone()));
    }
}

fn recorded(options: DragDropOptions) -> (DragDropContext, Recorder) {
    let recorder = Recorder::default();
    let ctx = DragDropContext::new(options).with_observer(recorder.clone());
    (ctx, recorder)
}

fn loc(collection_id: &str, index: usize) -> Location {
    Location::new(collection_id, index)
}

fn rows(count: usize, x: f32, row_height: f32) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            Rect::from_min_size(
                Pos2::new(x, i as f32 * row_height),
                Vec2::new(100.0, row_height),
            )
        })
        .collect()
}

#[test]
fn full_session_fires_hooks_in_order() {
    let (mut ctx, recorder) = recorded(DragDropOptions::default());

    ctx.begin("B", loc("col1", 1)).expect("no session yet");
    ctx.update(Some(loc("col1", 3)));
    let result = ctx.end().expect("session was active");

    assert_eq!(
        result,
        DropResult {
            item_id: "B".to_owned(),
            source: loc("col1", 1),
            destination: Some(loc("col1", 3)),
        }
    );
    assert_eq!(
        recorder.events(),
        vec![
            Event::BeforeStart(DragStart {
                item_id: "B".to_owned(),
                source: loc("col1", 1),
            }),
            Event::Update(DragUpdate {
                item_id: "B".to_owned(),
                source: loc("col1", 1),
                destination: Some(loc("col1", 3)),
            }),
            Event::End(result),
        ]
    );
    assert!(!ctx.is_dragging());
}

#[test]
fn before_start_runs_before_session_exists() {
    let seen_dragging = Rc::new(RefCell::new(None));
    let seen = Rc::clone(&seen_dragging);
    let mut ctx = DragDropContext::default().with_observer(
        DragCallbacks::default().on_before_drag_start(move |start| {
            *seen.borrow_mut() = Some(start.item_id.clone());
        }),
    );

    assert!(!ctx.is_dragging());
    ctx.begin("A", loc("col1", 0)).expect("no session yet");
    assert_eq!(seen_dragging.borrow().as_deref(), Some("A"));
    assert!(ctx.is_dragging());
    assert_eq!(ctx.session().map(|s| s.destination().is_none()), Ok(true));
}

#[test]
fn end_without_begin_returns_none_and_fires_nothing() {
    let (mut ctx, recorder) = recorded(DragDropOptions::default());
    assert!(ctx.end().is_none());
    assert!(recorder.events().is_empty());
}

#[test]
fn update_without_session_is_ignored() {
    let (mut ctx, recorder) = recorded(DragDropOptions::default());
    ctx.update(Some(loc("col1", 0)));
    assert!(recorder.events().is_empty());
    assert!(!ctx.is_dragging());

    // A stray move right after a drop.
    ctx.begin("A", loc("col1", 0)).expect("no session yet");
    ctx.end();
    ctx.update(Some(loc("col1", 1)));
    assert!(!ctx.is_dragging());
    assert!(
        !recorder
            .events()
            .iter()
            .any(|e| matches!(e, Event::Update(_))),
        "stray update must not reach the observer"
    );
}

#[test]
fn cleared_destination_ends_as_aborted_drop() {
    let (mut ctx, _recorder) = recorded(DragDropOptions::default());
    ctx.begin("A", loc("col1", 0)).expect("no session yet");
    ctx.update(Some(loc("col2", 1)));
    ctx.drag_outside();
    let result = ctx.end().expect("session was active");
    assert_eq!(result.destination, None);
    assert!(result.is_noop());
}

#[test]
fn cancel_discards_session_without_end_hook() {
    let (mut ctx, recorder) = recorded(DragDropOptions::default());
    ctx.begin("A", loc("col1", 0)).expect("no session yet");
    ctx.update(Some(loc("col1", 2)));

    assert!(ctx.cancel());
    assert!(!ctx.is_dragging());
    assert!(!ctx.cancel(), "second cancel has nothing to tear down");
    assert!(ctx.end().is_none());
    let events = recorder.events();
    assert!(
        !events.iter().any(|e| matches!(e, Event::End(_))),
        "cancel must not fire on_drag_end"
    );
}

#[test]
fn second_begin_replaces_session_by_default() {
    let (mut ctx, recorder) = recorded(DragDropOptions::default());
    ctx.begin("A", loc("col1", 0)).expect("no session yet");
    ctx.update(Some(loc("col1", 1)));
    ctx.begin("B", loc("col1", 1)).expect("replaces A");

    let active = ctx.session().expect("replacement is active");
    assert_eq!(active.item_id(), "B");
    assert_eq!(active.source(), &loc("col1", 1));
    assert_eq!(active.destination(), None, "nothing carried over from A");
    assert_eq!(active.id(), 2);

    let result = ctx.end().expect("session was active");
    assert_eq!(result.item_id, "B");
    assert_eq!(result.destination, None);

    let ends: Vec<_> = recorder
        .events()
        .into_iter()
        .filter(|e| matches!(e, Event::End(_)))
        .collect();
    assert_eq!(ends.len(), 1, "replaced session must not fire on_drag_end");
}

#[test]
fn second_begin_is_rejected_with_reject_policy() {
    let (mut ctx, recorder) = recorded(DragDropOptions {
        begin_policy: BeginPolicy::Reject,
        ..Default::default()
    });
    ctx.begin("A", loc("col1", 0)).expect("no session yet");

    let err = ctx.begin("B", loc("col1", 1)).expect_err("A is in flight");
    assert_eq!(
        err,
        DragDropError::SessionAlreadyActive {
            active: "A".to_owned(),
            requested: "B".to_owned(),
        }
    );
    assert_eq!(ctx.session().map(|s| s.item_id()), Ok("A"));

    let starts = recorder
        .events()
        .iter()
        .filter(|e| matches!(e, Event::BeforeStart(_)))
        .count();
    assert_eq!(starts, 1, "rejected begin must not fire before-start");
}

#[test]
fn session_outside_drag_is_an_error() {
    let ctx = DragDropContext::default();
    assert_eq!(ctx.session().err(), Some(DragDropError::NoActiveSession));
    assert!(ctx.current_update().is_none());
}

#[test]
fn drop_in_place_is_well_formed_noop() {
    let (mut ctx, _recorder) = recorded(DragDropOptions::default());
    ctx.begin("A", loc("col1", 2)).expect("no session yet");
    ctx.update(Some(loc("col1", 2)));
    let result = ctx.end().expect("session was active");
    assert_eq!(result.destination.as_ref(), Some(&result.source));
    assert!(result.is_noop());
    assert!(result.instruction().is_none());
}

#[test]
fn droppable_drives_a_same_list_drag() {
    let (mut ctx, recorder) = recorded(DragDropOptions::default());
    let items = [
        ItemBounds::new(0.0, 100.0),
        ItemBounds::new(100.0, 100.0),
        ItemBounds::new(200.0, 100.0),
    ];

    let mut list = ctx.droppable("col1");
    list.drag_start("B", 1).expect("no session yet");
    assert_eq!(list.drag_over(40.0, &items), 0);
    assert_eq!(list.placeholder_index(), Some(0));
    assert_eq!(list.drag_over(260.0, &items), 3);
    assert_eq!(list.placeholder_index(), Some(3));

    let result = ctx.end().expect("session was active");
    assert_eq!(result.destination, Some(loc("col1", 3)));
    assert_eq!(
        recorder
            .events()
            .iter()
            .filter(|e| matches!(e, Event::Update(_)))
            .count(),
        2
    );
}

#[test]
fn draggable_knows_when_it_is_dragged() {
    let mut ctx = DragDropContext::default();
    let mut list = ctx.droppable("col1");

    assert!(!list.draggable("A", 0).is_being_dragged());
    list.draggable("A", 0).drag_start().expect("idle");
    assert!(list.draggable("A", 0).is_being_dragged());
    assert!(!list.draggable("B", 1).is_being_dragged());

    let result = list.draggable("A", 0).drag_end().expect("was dragging");
    assert_eq!(result.source, loc("col1", 0));
    assert!(!list.draggable("A", 0).is_being_dragged());
}

#[test]
fn drag_move_routes_between_zones() {
    let (mut ctx, _recorder) = recorded(DragDropOptions::default());
    let zones = [
        DropZone::new(
            "todo",
            Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 400.0)),
            rows(2, 0.0, 40.0),
        ),
        DropZone::new(
            "done",
            Rect::from_min_size(Pos2::new(150.0, 0.0), Vec2::new(100.0, 400.0)),
            rows(2, 150.0, 40.0),
        ),
    ];

    let mut todo = ctx.droppable("todo");
    todo.drag_start("A", 0).expect("no session yet");

    let hit = ctx.drag_move(Pos2::new(170.0, 50.0), &zones);
    assert_eq!(hit, Some(loc("done", 1)));
    assert_eq!(ctx.placeholder_index("done"), Some(1));
    assert_eq!(ctx.placeholder_index("todo"), None);

    assert_eq!(ctx.drag_move(Pos2::new(125.0, 50.0), &zones), None);
    assert_eq!(ctx.placeholder_index("done"), None);

    let hit = ctx.drag_move(Pos2::new(170.0, 300.0), &zones);
    assert_eq!(hit, Some(loc("done", 2)));
    let result = ctx.end().expect("session was active");
    assert_eq!(result.destination, Some(loc("done", 2)));
}

#[test]
fn current_update_mirrors_observer_view() {
    let (mut ctx, recorder) = recorded(DragDropOptions::default());
    ctx.begin("A", loc("col1", 0)).expect("no session yet");
    ctx.update(Some(loc("col2", 4)));

    let Some(Event::Update(last)) = recorder.events().last().cloned() else {
        panic!("expected an update event");
    };
    assert_eq!(ctx.current_update(), Some(last));
    assert_eq!(ctx.session().map(|s| s.updates()), Ok(1));
}

#[test]
fn debug_event_log_is_bounded() {
    let mut ctx = DragDropContext::new(DragDropOptions {
        debug_event_log: true,
        debug_event_log_capacity: 3,
        ..Default::default()
    });

    ctx.end();
    ctx.begin("A", loc("col1", 0)).expect("no session yet");
    ctx.cancel();
    ctx.begin("B", loc("col1", 1)).expect("no session yet");
    ctx.end();

    let lines: Vec<&str> = ctx.debug_log_lines().collect();
    assert_eq!(lines.len(), 3, "{lines:?}");
    assert!(lines[0].contains("CANCEL"), "{lines:?}");
    assert!(lines[2].starts_with("[event 5]"), "{lines:?}");
    assert!(lines[2].contains("END"), "{lines:?}");

    ctx.debug_log_clear();
    assert!(ctx.debug_log_text().is_empty());
}

#[test]
fn debug_log_text_joins_lines_oldest_first() {
    let mut ctx = DragDropContext::new(DragDropOptions {
        debug_event_log: true,
        ..Default::default()
    });
    ctx.begin("A", loc("col1", 0)).expect("no session yet");
    ctx.cancel();

    let text = ctx.debug_log_text();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 2, "{text}");
    assert!(lines[0].starts_with("[event 1] session START"), "{text}");
    assert!(lines[1].starts_with("[event 2] session CANCEL"), "{text}");
    assert!(ctx.debug_log_lines().eq(lines.iter().copied()));
}

#[test]
fn debug_event_log_is_off_by_default() {
    let mut ctx = DragDropContext::default();
    ctx.end();
    ctx.begin("A", loc("col1", 0)).expect("no session yet");
    assert_eq!(ctx.debug_log_lines().count(), 0);
}
