use itertools::Itertools as _;

use super::DragDropContext;

impl DragDropContext {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message.into());
    }

    fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_event = self.debug_event.saturating_add(1);
        self.debug_log
            .push_back(format!("[event {}] {}", self.debug_event, message));
    }

    /// Lines recorded while [`super::DragDropOptions::debug_event_log`] is on, oldest first.
    pub fn debug_log_lines(&self) -> impl Iterator<Item = &str> {
        self.debug_log.iter().map(String::as_str)
    }

    /// All recorded lines joined with newlines, for copy-paste into a bug report.
    pub fn debug_log_text(&self) -> String {
        self.debug_log.iter().join("\n")
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }
}
