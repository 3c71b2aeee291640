use egui::{Pos2, Rect};

use super::DragDropContext;
use super::error::DragDropError;
use super::hit_test::{DropZone, zone_under_pointer};
use super::position::{ItemBounds, resolve_index, resolve_index_in_rects};
use super::types::{CollectionId, DropCandidate, ItemId, Location};

/// A collection that items can be dragged out of and dropped into.
///
/// Borrowed from a [`DragDropContext`], so every drag event it produces is routed to that context.
#[derive(Debug)]
pub struct Droppable<'a> {
    ctx: &'a mut DragDropContext,
    collection_id: CollectionId,
}

/// One item inside a [`Droppable`].
#[derive(Debug)]
pub struct Draggable<'d, 'a> {
    droppable: &'d mut Droppable<'a>,
    item_id: ItemId,
    index: usize,
}

impl DragDropContext {
    /// Scope drag events to one collection.
    pub fn droppable(&mut self, collection_id: impl Into<CollectionId>) -> Droppable<'_> {
        Droppable {
            ctx: self,
            collection_id: collection_id.into(),
        }
    }

    /// Route a pointer move across several rendered collections.
    ///
    /// Resolves the zone under `pointer` and the insertion index inside it, then feeds the
    /// candidate to [`Self::update`]. A pointer over no zone feeds "no destination".
    /// Returns the candidate that was fed.
    pub fn drag_move(&mut self, pointer: Pos2, zones: &[DropZone]) -> Option<Location> {
        let destination = zone_under_pointer(pointer, zones).map(|zone| {
            let index = resolve_index_in_rects(pointer.y, &zone.collection_id, &zone.item_rects);
            Location::new(zone.collection_id.clone(), index)
        });
        self.update(DropCandidate::from(destination.clone()));
        destination
    }

    /// The pointer left every drop target.
    pub fn drag_outside(&mut self) {
        self.update(DropCandidate::none());
    }
}

impl<'a> Droppable<'a> {
    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    pub fn draggable<'d>(
        &'d mut self,
        item_id: impl Into<ItemId>,
        index: usize,
    ) -> Draggable<'d, 'a> {
        Draggable {
            droppable: self,
            item_id: item_id.into(),
            index,
        }
    }

    /// Shorthand for `self.draggable(item_id, index).drag_start()`.
    ///
    /// # Errors
    /// See [`DragDropContext::begin`].
    pub fn drag_start(
        &mut self,
        item_id: impl Into<ItemId>,
        index: usize,
    ) -> Result<(), DragDropError> {
        self.draggable(item_id, index).drag_start()
    }

    /// The pointer moved over this collection.
    ///
    /// Resolves the insertion index among `items` (measured in on-screen order), feeds it to the
    /// context as the new candidate and returns it.
    pub fn drag_over(&mut self, pointer_y: f32, items: &[ItemBounds]) -> usize {
        let index = resolve_index(pointer_y, &self.collection_id, items);
        self.feed(index);
        index
    }

    /// [`Self::drag_over`] with egui-measured rects.
    pub fn drag_over_rects(&mut self, pointer: Pos2, item_rects: &[Rect]) -> usize {
        let index = resolve_index_in_rects(pointer.y, &self.collection_id, item_rects);
        self.feed(index);
        index
    }

    /// Placeholder position inside this collection for the current drag, if it targets it.
    pub fn placeholder_index(&self) -> Option<usize> {
        self.ctx.placeholder_index(&self.collection_id)
    }

    fn feed(&mut self, index: usize) {
        let destination = Location::new(self.collection_id.clone(), index);
        self.ctx.update(DropCandidate::at(destination));
    }
}

impl Draggable<'_, '_> {
    pub fn location(&self) -> Location {
        Location::new(self.droppable.collection_id.clone(), self.index)
    }

    /// True if this item is the one being dragged right now.
    pub fn is_being_dragged(&self) -> bool {
        self.droppable.ctx.session().is_ok_and(|active| {
            active.item_id() == self.item_id && *active.source() == self.location()
        })
    }

    /// The pointer picked this item up.
    ///
    /// # Errors
    /// See [`DragDropContext::begin`].
    pub fn drag_start(&mut self) -> Result<(), DragDropError> {
        let source = self.location();
        self.droppable.ctx.begin(self.item_id.clone(), source)
    }

    /// The pointer released this item. Same as [`DragDropContext::end`].
    pub fn drag_end(&mut self) -> Option<super::DropResult> {
        self.droppable.ctx.end()
    }
}
