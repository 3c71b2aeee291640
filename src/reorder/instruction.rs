use super::error::ApplyError;
use super::types::{CollectionId, DropResult, Location};

/// What the owner of the collections has to do with a [`DropResult`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReorderInstruction {
    /// Aborted drop, or dropped where it started.
    None,

    /// Move within one collection: remove at `from`, then insert at `to` in the post-removal
    /// sequence.
    Reorder {
        collection_id: CollectionId,
        from: usize,
        to: usize,
    },

    /// Move between two independent collections.
    Transfer {
        source: Location,
        destination: Location,
    },
}

impl ReorderInstruction {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl DropResult {
    pub fn instruction(&self) -> ReorderInstruction {
        let Some(destination) = &self.destination else {
            return ReorderInstruction::None;
        };
        if *destination == self.source {
            return ReorderInstruction::None;
        }

        if destination.same_collection(&self.source) {
            ReorderInstruction::Reorder {
                collection_id: self.source.collection_id.clone(),
                from: self.source.index,
                to: destination.index,
            }
        } else {
            ReorderInstruction::Transfer {
                source: self.source.clone(),
                destination: destination.clone(),
            }
        }
    }
}

/// Same-collection move: remove at `from`, then insert into the post-removal sequence at `to`.
///
/// `to` was resolved while the dragged item still occupied its slot, so it may equal
/// `list.len()`; it is clamped to the post-removal length (append).
///
/// # Errors
///
/// [`ApplyError::SourceOutOfBounds`] if `from >= list.len()`.
/// [`ApplyError::DestinationOutOfBounds`] if `to > list.len()`. The list is untouched either way.
pub fn reorder<T>(
    list: &mut Vec<T>,
    collection_id: &str,
    from: usize,
    to: usize,
) -> Result<(), ApplyError> {
    if from >= list.len() {
        return Err(ApplyError::SourceOutOfBounds {
            source: Location::new(collection_id, from),
            len: list.len(),
        });
    }
    if to > list.len() {
        return Err(ApplyError::DestinationOutOfBounds {
            destination: Location::new(collection_id, to),
            len: list.len(),
        });
    }

    let item = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, item);
    Ok(())
}

/// Cross-collection move. The two sequences are independent, so no index adjustment is needed.
///
/// Nothing is mutated unless both indices are valid.
///
/// # Errors
///
/// [`ApplyError::SourceOutOfBounds`] if `source.index` is not an item of `source_list`.
/// [`ApplyError::DestinationOutOfBounds`] if `destination.index > destination_list.len()`.
pub fn transfer<T>(
    source_list: &mut Vec<T>,
    source: &Location,
    destination_list: &mut Vec<T>,
    destination: &Location,
) -> Result<(), ApplyError> {
    if source.index >= source_list.len() {
        return Err(ApplyError::SourceOutOfBounds {
            source: source.clone(),
            len: source_list.len(),
        });
    }
    if destination.index > destination_list.len() {
        return Err(ApplyError::DestinationOutOfBounds {
            destination: destination.clone(),
            len: destination_list.len(),
        });
    }

    let item = source_list.remove(source.index);
    destination_list.insert(destination.index, item);
    Ok(())
}
