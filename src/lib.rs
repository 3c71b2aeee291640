//! Drag-and-drop list reordering.
//!
//! [`DragDropContext`] tracks a single in-flight drag, [`position::resolve_index`] turns pointer
//! coordinates into insertion indices, and [`DropResult::instruction`] /
//! [`Collections::apply`] turn a finished drag into a reorder or a transfer between lists.
//!
//! The engine never renders anything and never owns your lists: feed it measured item bounds
//! (plain [`ItemBounds`] or `egui` rects) and apply the results yourself.

#![forbid(unsafe_code)]

pub mod reorder;

pub use reorder::position;
pub use reorder::{
    ActiveDrag, ApplyError, BeginPolicy, CollectionId, Collections, DragCallbacks, DragDropContext,
    DragDropError, DragDropOptions, DragObserver, DragStart, DragUpdate, Draggable, DropCandidate,
    DropResult, DropZone, Droppable, ItemBounds, ItemId, Location, ReorderInstruction,
    collection_integrity_issues, drop_result_issues, reorder, resolve_index, transfer,
    zone_under_pointer,
};
