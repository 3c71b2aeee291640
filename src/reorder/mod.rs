//! Drag session lifecycle for reorderable lists.
//!
//! The input layer drives a [`DragDropContext`]:
//! `begin` (pointer picks an item up) → `update` per pointer move (usually through
//! [`Droppable::drag_over`] or [`DragDropContext::drag_move`], which run the position resolver) →
//! `end` (release, yields a [`DropResult`]) or `cancel` (aborted gesture).
//!
//! The context never touches the application's lists; it only tells the owner what to do with
//! them (see [`DropResult::instruction`] and [`Collections::apply`]).

use std::collections::VecDeque;

mod collections;
mod debug;
mod droppable;
mod error;
mod instruction;
mod integrity;
mod observer;
mod options;
pub mod position;
mod session;
mod types;

#[cfg(test)]
mod context_tests;

pub use collections::Collections;
pub use droppable::{Draggable, Droppable};
pub use error::{ApplyError, DragDropError};
pub use hit_test::{DropZone, zone_under_pointer};
pub use instruction::{ReorderInstruction, reorder, transfer};
pub use integrity::{collection_integrity_issues, drop_result_issues};
pub use observer::{DragCallbacks, DragObserver};
pub use options::{BeginPolicy, DragDropOptions};
pub use position::{ItemBounds, resolve_index};
pub use session::ActiveDrag;
pub use types::{CollectionId, DragStart, DragUpdate, DropCandidate, DropResult, ItemId, Location};

use session::DragSession;

/// Owns the (single) drag session and the observers that get told about it.
pub struct DragDropContext {
    options: DragDropOptions,
    observer: Box<dyn DragObserver>,
    session: DragSession,

    debug_event: u64,
    debug_log: VecDeque<String>,
}

impl std::fmt::Debug for DragDropContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragDropContext")
            .field("options", &self.options)
            .field("session", &self.session)
            .field("debug_log_len", &self.debug_log.len())
            .finish_non_exhaustive()
    }
}

impl Default for DragDropContext {
    fn default() -> Self {
        Self::new(DragDropOptions::default())
    }
}

impl DragDropContext {
    pub fn new(options: DragDropOptions) -> Self {
        Self {
            options,
            observer: Box::new(()),
            session: DragSession::default(),
            debug_event: 0,
            debug_log: VecDeque::new(),
        }
    }

    /// Replace the observer set.
    #[must_use]
    pub fn with_observer(mut self, observer: impl DragObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn set_observer(&mut self, observer: impl DragObserver + 'static) {
        self.observer = Box::new(observer);
    }

    pub fn options(&self) -> &DragDropOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut DragDropOptions {
        &mut self.options
    }

    /// Pick up `item_id` at `source`.
    ///
    /// Fires [`DragObserver::on_before_drag_start`], then installs a session with no destination.
    /// If a session is already active, [`DragDropOptions::begin_policy`] decides: `Replace` drops
    /// the old session silently (no `on_drag_end`), `Reject` returns
    /// [`DragDropError::SessionAlreadyActive`] and changes nothing.
    ///
    /// # Errors
    /// Only with [`BeginPolicy::Reject`], when another drag is in flight.
    pub fn begin(
        &mut self,
        item_id: impl Into<ItemId>,
        source: Location,
    ) -> Result<(), DragDropError> {
        let start = DragStart {
            item_id: item_id.into(),
            source,
        };

        if let Some(active) = self.session.active() {
            match self.options.begin_policy {
                BeginPolicy::Reject => {
                    let err = DragDropError::SessionAlreadyActive {
                        active: active.item_id().to_owned(),
                        requested: start.item_id,
                    };
                    log::warn!("drag begin rejected: {err}");
                    self.debug_log_event(format!("begin REJECTED {err}"));
                    return Err(err);
                }
                BeginPolicy::Replace => {
                    log::warn!(
                        "drag begin item={:?} replaces active session id={} item={:?}",
                        start.item_id,
                        active.id(),
                        active.item_id()
                    );
                }
            }
        }

        self.observer.on_before_drag_start(&start);

        let message = format!("begin item={:?} source={}", start.item_id, start.source);
        if let Some(replaced) = self.session.start(start) {
            self.debug_log_event(format!("session REPLACED id={}", replaced.id()));
        }
        let id = self.session.active().map_or(0, ActiveDrag::id);
        log::debug!("drag session START id={id} {message}");
        self.debug_log_event(format!("session START id={id} {message}"));
        Ok(())
    }

    /// Record the latest drop candidate.
    ///
    /// Without an active session this does nothing: pointer moves can race with the end of a
    /// gesture. Otherwise fires [`DragObserver::on_drag_update`] with the full
    /// [`DragUpdate`].
    pub fn update(&mut self, candidate: impl Into<DropCandidate>) {
        let DropCandidate { destination } = candidate.into();
        let Some(active) = self.session.set_destination(destination) else {
            log::trace!("drag update ignored: no active session");
            self.debug_log_event("update IGNORED (no active session)");
            return;
        };

        let update = active.to_update();
        log::trace!(
            "drag session UPDATE id={} destination={:?}",
            active.id(),
            update.destination
        );
        self.observer.on_drag_update(&update);
    }

    /// Release: close the session and report where the item was dropped.
    ///
    /// Returns `None` (and fires nothing) when no session is active, e.g. an end event without a
    /// preceding begin. Otherwise fires [`DragObserver::on_drag_end`] with the exact result
    /// returned.
    pub fn end(&mut self) -> Option<DropResult> {
        let Some((id, result)) = self.session.finish() else {
            log::debug!("drag end ignored: no active session");
            self.debug_log_event("end IGNORED (no active session)");
            return None;
        };

        log::debug!(
            "drag session END id={id} item={:?} source={} destination={:?}",
            result.item_id,
            result.source,
            result.destination
        );
        self.debug_log_event(format!(
            "session END id={id} item={:?} destination={}",
            result.item_id,
            result
                .destination
                .as_ref()
                .map_or_else(|| "none".to_owned(), ToString::to_string)
        ));
        self.observer.on_drag_end(&result);
        Some(result)
    }

    /// Abort the gesture (escape key, pointer capture lost).
    ///
    /// No [`DropResult`] is produced and [`DragObserver::on_drag_end`] is not fired.
    /// Returns whether a session was torn down.
    pub fn cancel(&mut self) -> bool {
        let Some(cancelled) = self.session.abort() else {
            return false;
        };
        log::debug!(
            "drag session CANCEL id={} item={:?}",
            cancelled.id(),
            cancelled.item_id()
        );
        self.debug_log_event(format!("session CANCEL id={}", cancelled.id()));
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.session.active().is_some()
    }

    /// The in-flight drag, for code that only makes sense during one.
    ///
    /// # Errors
    /// [`DragDropError::NoActiveSession`] outside a drag. This is a wiring bug in the caller,
    /// unlike the racy input events absorbed by [`Self::update`] and [`Self::end`].
    pub fn session(&self) -> Result<&ActiveDrag, DragDropError> {
        self.session.active().ok_or(DragDropError::NoActiveSession)
    }

    /// What an `on_drag_update` observer would see right now.
    pub fn current_update(&self) -> Option<DragUpdate> {
        self.session.active().map(ActiveDrag::to_update)
    }

    /// Where to render the drop placeholder inside `collection_id`, if the current candidate
    /// targets it.
    pub fn placeholder_index(&self, collection_id: &str) -> Option<usize> {
        self.session
            .active()?
            .destination()
            .filter(|destination| destination.collection_id == collection_id)
            .map(|destination| destination.index)
    }
}
