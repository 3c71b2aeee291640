use super::types::{DragStart, DragUpdate, DropResult, ItemId, Location};

/// The in-flight drag, as seen by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveDrag {
    id: u64,
    item_id: ItemId,
    source: Location,
    destination: Option<Location>,
    updates: u64,
}

impl ActiveDrag {
    /// Monotonic per-context session id, starting at 1.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn source(&self) -> &Location {
        &self.source
    }

    /// Latest accepted candidate, `None` when the pointer is over no drop target.
    pub fn destination(&self) -> Option<&Location> {
        self.destination.as_ref()
    }

    /// Number of accepted updates so far.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    pub(super) fn to_update(&self) -> DragUpdate {
        DragUpdate {
            item_id: self.item_id.clone(),
            source: self.source.clone(),
            destination: self.destination.clone(),
        }
    }
}

/// At most one [`ActiveDrag`] at a time.
#[derive(Debug, Default)]
pub(super) struct DragSession {
    next_id: u64,
    active: Option<ActiveDrag>,
}

impl DragSession {
    pub(super) fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// Installs a fresh session, returning the one it displaced (if any).
    pub(super) fn start(&mut self, start: DragStart) -> Option<ActiveDrag> {
        let id = self.next_id.max(1);
        self.next_id = id.saturating_add(1);
        self.active.replace(ActiveDrag {
            id,
            item_id: start.item_id,
            source: start.source,
            destination: None,
            updates: 0,
        })
    }

    /// Returns `None` (and changes nothing) when no session is active.
    pub(super) fn set_destination(&mut self, destination: Option<Location>) -> Option<&ActiveDrag> {
        let active = self.active.as_mut()?;
        active.destination = destination;
        active.updates = active.updates.saturating_add(1);
        Some(active)
    }

    pub(super) fn finish(&mut self) -> Option<(u64, DropResult)> {
        let ended = self.active.take()?;
        Some((
            ended.id,
            DropResult {
                item_id: ended.item_id,
                source: ended.source,
                destination: ended.destination,
            },
        ))
    }

    pub(super) fn abort(&mut self) -> Option<ActiveDrag> {
        self.active.take()
    }
}
