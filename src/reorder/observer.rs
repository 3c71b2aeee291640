use super::types::{DragStart, DragUpdate, DropResult};

/// Hooks invoked in-line by [`super::DragDropContext`].
///
/// All methods have empty default implementations, so implement only what you need.
///
/// The context owns its observer and is mutably borrowed while a hook runs, so a hook cannot
/// re-enter the context (no `begin` from inside `on_drag_end`).
pub trait DragObserver {
    /// Once per session, before the session is installed and before any update.
    fn on_before_drag_start(&mut self, _start: &DragStart) {}

    /// On every accepted update (i.e. while a session is active).
    fn on_drag_update(&mut self, _update: &DragUpdate) {}

    /// Once per session closed through `end()`. Never called for `cancel()` or a replaced session.
    fn on_drag_end(&mut self, _result: &DropResult) {}
}

impl DragObserver for () {}

type Hook<T> = Box<dyn FnMut(&T)>;

/// Convenience [`DragObserver`] built from optional closures.
///
/// ```
/// use egui_reorder::{DragCallbacks, DragDropContext, DragDropOptions, Location};
///
/// let mut ctx = DragDropContext::new(DragDropOptions::default()).with_observer(
///     DragCallbacks::default().on_drag_end(|result| println!("dropped {}", result.item_id)),
/// );
/// ctx.begin("a", Location::new("todo", 0)).unwrap();
/// ctx.end();
/// ```
#[derive(Default)]
pub struct DragCallbacks {
    before_drag_start: Option<Hook<DragStart>>,
    drag_update: Option<Hook<DragUpdate>>,
    drag_end: Option<Hook<DropResult>>,
}

impl DragCallbacks {
    #[must_use]
    pub fn on_before_drag_start(mut self, hook: impl FnMut(&DragStart) + 'static) -> Self {
        self.before_drag_start = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_drag_update(mut self, hook: impl FnMut(&DragUpdate) + 'static) -> Self {
        self.drag_update = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn on_drag_end(mut self, hook: impl FnMut(&DropResult) + 'static) -> Self {
        self.drag_end = Some(Box::new(hook));
        self
    }
}

impl std::fmt::Debug for DragCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("before_drag_start", &self.before_drag_start.is_some())
            .field("drag_update", &self.drag_update.is_some())
            .field("drag_end", &self.drag_end.is_some())
            .finish()
    }
}

impl DragObserver for DragCallbacks {
    fn on_before_drag_start(&mut self, start: &DragStart) {
        if let Some(hook) = &mut self.before_drag_start {
            hook(start);
        }
    }

    fn on_drag_update(&mut self, update: &DragUpdate) {
        if let Some(hook) = &mut self.drag_update {
            hook(update);
        }
    }

    fn on_drag_end(&mut self, result: &DropResult) {
        if let Some(hook) = &mut self.drag_end {
            hook(result);
        }
    }
}
