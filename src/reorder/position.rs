//! Turns a pointer coordinate into an insertion index inside one collection.
//!
//! Everything here is pure: the same inputs always produce the same index, so it can be tested
//! without any live layout.

use egui::Rect;

use super::types::Location;

/// Measured vertical extent of one rendered item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemBounds {
    pub top: f32,
    pub height: f32,
}

impl ItemBounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn mid_y(self) -> f32 {
        self.top + self.height / 2.0
    }
}

impl From<Rect> for ItemBounds {
    fn from(rect: Rect) -> Self {
        Self::new(rect.top(), rect.height())
    }
}

/// Insertion index for a drop at `pointer_y` among `items` (in on-screen order).
///
/// Returns the position of the first item whose vertical midpoint lies below the pointer, or
/// `items.len()` (append) when the pointer is below every midpoint. An empty collection always
/// resolves to `0`. A NaN pointer compares below nothing and resolves to `items.len()`.
///
/// `target` only labels the trace output; the resolver knows collections by id alone.
pub fn resolve_index(pointer_y: f32, target: &str, items: &[ItemBounds]) -> usize {
    let index = items
        .iter()
        .position(|item| pointer_y < item.mid_y())
        .unwrap_or(items.len());
    log::trace!(
        "resolve_index target={target:?} pointer_y={pointer_y:.1} items={} -> {index}",
        items.len()
    );
    index
}

/// [`resolve_index`], packaged as a destination [`Location`].
pub fn resolve_location(pointer_y: f32, target: &str, items: &[ItemBounds]) -> Location {
    Location::new(target, resolve_index(pointer_y, target, items))
}

/// [`resolve_index`] over rects measured by egui.
pub fn resolve_index_in_rects(pointer_y: f32, target: &str, item_rects: &[Rect]) -> usize {
    let items: Vec<ItemBounds> = item_rects.iter().copied().map(ItemBounds::from).collect();
    resolve_index(pointer_y, target, &items)
}
