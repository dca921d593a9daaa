use super::timer::Debouncer;
use std::time::{Duration, Instant};

/// Quiet period before a raw-text edit is considered settled.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Binding for a mounted raw-text view.
///
/// Owns the keystroke-coalescing state for one text editor instance. The
/// host creates a pane when the raw view mounts and drops it when the view
/// unmounts or is hidden, so pending edit state cannot outlive the view it
/// came from; release happens on every exit path by ownership alone.
#[derive(Debug)]
pub struct TextPane {
    debounce: Debouncer<String>,
}

impl TextPane {
    pub fn new() -> Self {
        Self::with_quiet_period(DEFAULT_QUIET_PERIOD)
    }

    pub fn with_quiet_period(quiet: Duration) -> Self {
        Self {
            debounce: Debouncer::new(quiet),
        }
    }

    /// Record the text view's current content, restarting the quiet period.
    /// Rapid successive edits collapse to the latest content.
    pub fn edit(&mut self, text: String, now: Instant) {
        self.debounce.push(text, now);
    }

    /// The settled content, once no edit has arrived for the quiet period.
    /// Feed the result to
    /// [`Coordinator::apply_raw_edit`](super::Coordinator::apply_raw_edit).
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        self.debounce.poll(now)
    }

    pub fn has_pending(&self) -> bool {
        self.debounce.is_pending()
    }
}

impl Default for TextPane {
    fn default() -> Self {
        Self::new()
    }
}
