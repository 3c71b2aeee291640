use itertools::Itertools as _;

use super::error::ApplyError;
use super::instruction::{ReorderInstruction, reorder, transfer};
use super::types::{CollectionId, DropResult, ItemId, Location};

/// An application-side snapshot: ordered item ids per collection.
///
/// The drag engine never mutates this; the owner applies finished drops with [`Self::apply`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collections {
    lists: ahash::HashMap<CollectionId, Vec<ItemId>>,
}

impl Collections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Self::insert`].
    #[must_use]
    pub fn with<I>(mut self, collection_id: impl Into<CollectionId>, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        self.insert(collection_id, items);
        self
    }

    /// Set (or replace) a collection, returning the previous sequence.
    pub fn insert<I>(
        &mut self,
        collection_id: impl Into<CollectionId>,
        items: I,
    ) -> Option<Vec<ItemId>>
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.lists.insert(collection_id.into(), items)
    }

    pub fn get(&self, collection_id: &str) -> Option<&[ItemId]> {
        self.lists.get(collection_id).map(Vec::as_slice)
    }

    pub fn len_of(&self, collection_id: &str) -> Option<usize> {
        self.lists.get(collection_id).map(Vec::len)
    }

    /// Collection ids in sorted order.
    pub fn collection_ids(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str).sorted()
    }

    /// `(collection id, items)` pairs, sorted by collection id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ItemId])> {
        self.lists
            .iter()
            .map(|(id, items)| (id.as_str(), items.as_slice()))
            .sorted_by_key(|(id, _)| *id)
    }

    /// Apply a finished drop.
    ///
    /// No-op results (no destination, or dropped in place) change nothing and are not validated.
    /// Otherwise the dragged item must still sit at `source.index`; every check happens before
    /// anything is mutated, so an `Err` leaves the snapshot untouched.
    ///
    /// # Errors
    ///
    /// [`ApplyError::UnknownCollection`] if the source or destination collection is missing.
    /// [`ApplyError::SourceOutOfBounds`] or [`ApplyError::ItemMismatch`] if the dragged item no
    /// longer sits at `source.index`. [`ApplyError::DestinationOutOfBounds`] if the destination
    /// index is past the end of its collection.
    pub fn apply(&mut self, result: &DropResult) -> Result<ReorderInstruction, ApplyError> {
        let instruction = result.instruction();
        match &instruction {
            ReorderInstruction::None => {
                log::debug!("apply item={:?}: no-op", result.item_id);
            }
            ReorderInstruction::Reorder {
                collection_id,
                from,
                to,
            } => {
                let list = self
                    .lists
                    .get_mut(collection_id)
                    .ok_or_else(|| unknown_collection(collection_id))?;
                check_item_at(list, &result.source, &result.item_id)?;
                reorder(list, collection_id, *from, *to)?;
                log::debug!(
                    "apply item={:?}: reorder {collection_id:?} {from} -> {to}",
                    result.item_id
                );
            }
            ReorderInstruction::Transfer {
                source,
                destination,
            } => {
                self.apply_transfer(&result.item_id, source, destination)?;
                log::debug!(
                    "apply item={:?}: transfer {source} -> {destination}",
                    result.item_id
                );
            }
        }
        Ok(instruction)
    }

    fn apply_transfer(
        &mut self,
        item_id: &str,
        source: &Location,
        destination: &Location,
    ) -> Result<(), ApplyError> {
        let Some(mut source_list) = self.lists.remove(&source.collection_id) else {
            return Err(unknown_collection(&source.collection_id));
        };

        let outcome = self
            .lists
            .get_mut(&destination.collection_id)
            .ok_or_else(|| unknown_collection(&destination.collection_id))
            .and_then(|destination_list| {
                check_item_at(&source_list, source, item_id)?;
                transfer(&mut source_list, source, destination_list, destination)
            });

        self.lists.insert(source.collection_id.clone(), source_list);
        outcome
    }
}

fn unknown_collection(collection_id: &str) -> ApplyError {
    ApplyError::UnknownCollection(collection_id.to_owned())
}

fn check_item_at(list: &[ItemId], source: &Location, item_id: &str) -> Result<(), ApplyError> {
    match list.get(source.index) {
        None => Err(ApplyError::SourceOutOfBounds {
            source: source.clone(),
            len: list.len(),
        }),
        Some(found) if found != item_id => Err(ApplyError::ItemMismatch {
            source: source.clone(),
            expected: item_id.to_owned(),
            found: found.clone(),
        }),
        Some(_) => Ok(()),
    }
}
