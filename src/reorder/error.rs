use super::types::{CollectionId, ItemId, Location};

/// Misuse of the drag session lifecycle.
///
/// Input races (a stray move after drop, an end without a begin) are *not* errors; they are
/// absorbed by [`super::DragDropContext::update`] and [`super::DragDropContext::end`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragDropError {
    /// `begin` while another drag is in flight, with [`super::BeginPolicy::Reject`].
    SessionAlreadyActive { active: ItemId, requested: ItemId },

    /// Something required an in-flight drag, but there is none.
    NoActiveSession,
}

impl std::fmt::Display for DragDropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SessionAlreadyActive { active, requested } => {
                write!(f, "{requested:?} blocked: {active:?} is being dragged")
            }
            Self::NoActiveSession => write!(f, "no drag session is active"),
        }
    }
}

impl std::error::Error for DragDropError {}

/// A [`super::DropResult`] could not be applied to a collection snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyError {
    UnknownCollection(CollectionId),
    SourceOutOfBounds { source: Location, len: usize },
    DestinationOutOfBounds { destination: Location, len: usize },

    /// The item at the source index is not the dragged item (the snapshot changed mid-drag).
    ItemMismatch {
        source: Location,
        expected: ItemId,
        found: ItemId,
    },
}

impl std::fmt::Display for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCollection(id) => write!(f, "unknown collection {id:?}"),
            Self::SourceOutOfBounds { source, len } => {
                write!(f, "source {source} out of bounds (len {len})")
            }
            Self::DestinationOutOfBounds { destination, len } => {
                write!(f, "destination {destination} out of bounds (len {len})")
            }
            Self::ItemMismatch {
                source,
                expected,
                found,
            } => write!(f, "expected {expected:?} at {source}, found {found:?}"),
        }
    }
}

impl std::error::Error for ApplyError {}
