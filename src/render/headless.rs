//! Headless list surface.
//!
//! Records every bridge interaction so sessions can be driven without a
//! live rendering surface.

use super::bridge::{ListSurface, VisualEntry};

/// Surface implementation that records entries and input clears.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    entries: Vec<VisualEntry>,
    input_clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries appended so far, in display order.
    pub fn entries(&self) -> &[VisualEntry] {
        &self.entries
    }

    /// Number of times the input field was cleared.
    pub fn input_clears(&self) -> usize {
        self.input_clears
    }
}

impl ListSurface for RecordingSurface {
    fn append_entry(&mut self, entry: &VisualEntry) {
        self.entries.push(entry.clone());
    }

    fn clear_input(&mut self) {
        self.input_clears += 1;
    }
}
