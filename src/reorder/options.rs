/// What [`super::DragDropContext::begin`] does while another drag is still in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BeginPolicy {
    /// Cancel the in-flight session (no `on_drag_end`) and start the new one.
    ///
    /// This is what happens when an input source loses the end event of a gesture and starts the
    /// next one: the stale session must not block the user.
    #[default]
    Replace,

    /// Keep the in-flight session and return [`super::DragDropError::SessionAlreadyActive`].
    Reject,
}

/// Options for [`super::DragDropContext`].
#[derive(Clone, Debug)]
pub struct DragDropOptions {
    /// Policy for a second `begin` while a session is active.
    pub begin_policy: BeginPolicy,

    /// If true, record session events (begin/update/end/cancel, rejected begins, dropped races)
    /// in a small ring buffer readable through [`super::DragDropContext::debug_log_lines`].
    ///
    /// Independent of the `log` facade, which always receives the same events.
    pub debug_event_log: bool,

    /// Max number of lines kept by the debug event log. Clamped to `1..=10_000`.
    pub debug_event_log_capacity: usize,
}

impl Default for DragDropOptions {
    fn default() -> Self {
        Self {
            begin_policy: BeginPolicy::default(),
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}
