//! Submitted-line history — a lossless rotating ring.
//!
//! Every submission is pushed at the front. Up/Down navigation rotates the
//! ring instead of walking an index: the recalled entry moves to the
//! opposite end, so repeated presses cycle through the entire ring and a
//! matched number of Up and Down presses restores the original order.

use std::collections::VecDeque;

/// Direction of a history recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
}

/// A rotating ring of previously submitted lines, front = most recent.
///
/// Unbounded: capacity control lives with the bound item store, not here.
#[derive(Debug, Default)]
pub struct HistoryRing {
    entries: VecDeque<String>,
}

impl HistoryRing {
    pub fn new() -> Self {
        HistoryRing {
            entries: VecDeque::new(),
        }
    }

    /// Record a submitted line as the most recent entry.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
    }

    /// Rotate the ring and return the entry to display, or `None` when the
    /// ring is empty.
    ///
    /// Up takes the front (most recent) entry and moves it to the back;
    /// Down takes the back entry and moves it to the front.
    pub fn recall(&mut self, direction: NavDirection) -> Option<String> {
        match direction {
            NavDirection::Up => {
                let entry = self.entries.pop_front()?;
                self.entries.push_back(entry.clone());
                Some(entry)
            }
            NavDirection::Down => {
                let entry = self.entries.pop_back()?;
                self.entries.push_front(entry.clone());
                Some(entry)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
