/// Identifier of an ordered collection (a "droppable" list).
pub type CollectionId = String;

/// Identifier of a draggable item.
pub type ItemId = String;

/// A position inside a named ordered collection.
///
/// As a drag source, `index` points at an existing item.
/// As a drop destination, `index` is an *insertion* index and may equal the collection length
/// ("append at end").
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Location {
    pub collection_id: CollectionId,
    pub index: usize,
}

impl Location {
    pub fn new(collection_id: impl Into<CollectionId>, index: usize) -> Self {
        Self {
            collection_id: collection_id.into(),
            index,
        }
    }

    /// Same collection, ignoring the index.
    pub fn same_collection(&self, other: &Self) -> bool {
        self.collection_id == other.collection_id
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]", self.collection_id, self.index)
    }
}

/// Captured once when a drag begins. Handed to [`super::DragObserver::on_before_drag_start`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DragStart {
    pub item_id: ItemId,
    pub source: Location,
}

/// The latest drop candidate produced by the input layer / position resolver.
///
/// `destination == None` means there is no valid drop target under the pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DropCandidate {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub destination: Option<Location>,
}

impl DropCandidate {
    pub fn at(destination: Location) -> Self {
        Self {
            destination: Some(destination),
        }
    }

    /// Pointer is not over any drop target.
    pub fn none() -> Self {
        Self { destination: None }
    }
}

impl From<Option<Location>> for DropCandidate {
    fn from(destination: Option<Location>) -> Self {
        Self { destination }
    }
}

/// The full picture handed to [`super::DragObserver::on_drag_update`].
///
/// Rebuilt from the session state on every accepted update; observers never see the bare
/// [`DropCandidate`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DragUpdate {
    pub item_id: ItemId,
    pub source: Location,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub destination: Option<Location>,
}

/// Terminal artifact of a drag session.
///
/// `destination == None` signals an aborted or invalid drop.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DropResult {
    pub item_id: ItemId,
    pub source: Location,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub destination: Option<Location>,
}

impl DropResult {
    /// True if applying this result must not mutate anything:
    /// no destination, or dropped exactly where it started.
    pub fn is_noop(&self) -> bool {
        self.destination
            .as_ref()
            .is_none_or(|destination| *destination == self.source)
    }
}
